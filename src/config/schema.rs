//! Configuration schema definitions
//!
//! `RawConfig` is the untrusted shape the host hands over: any field may be
//! missing or carry the wrong type, and deserialization must not fail for
//! anything that is a JSON object. `NormalizedConfig` is the canonical,
//! fully-populated record every other module works with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::domain_of;

/// Default icon size stored as a CSS pixel length.
pub const DEFAULT_ICON_SIZE: &str = "40px";
/// Default hold duration in milliseconds.
pub const DEFAULT_HOLD_MS: f64 = 800.0;

/// Raw card configuration as received from the host.
///
/// Every field is optional and deserialized leniently: a wrong-typed value
/// decays to "absent" instead of failing the whole payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawConfig {
    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// Literal name override; empty string clears the override.
    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name placement token, validated during normalization.
    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_align: Option<String>,

    /// Literal icon override (e.g. `mdi:fan`).
    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, deserialize_with = "lenient::boolean")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_icon: Option<bool>,

    /// Icon size; accepts a bare integer or a `px`-suffixed string.
    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<String>,

    // Layout lengths are opaque CSS values passed through untouched.
    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_width: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_gap: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_radius: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_radius: Option<String>,

    /// Hold duration in milliseconds. A present but non-numeric value
    /// coerces to NaN so normalization can apply the fallback.
    #[serde(default, deserialize_with = "lenient::number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_duration: Option<f64>,

    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_color: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_color: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_color: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_color: Option<String>,
}

impl RawConfig {
    /// Parse a raw configuration from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`super::ConfigError::InvalidPayload`] when the value is not a
    /// JSON object. Every object parses; wrong-typed fields become absent.
    pub fn from_value(value: &Value) -> Result<Self, super::ConfigError> {
        if !value.is_object() {
            return Err(super::ConfigError::InvalidPayload);
        }
        serde_json::from_value(value.clone()).map_err(|_| super::ConfigError::InvalidPayload)
    }
}

/// Placement of the name label relative to the toggle track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameAlign {
    /// Label rendering suppressed.
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl NameAlign {
    /// All recognized placements, in editor display order.
    pub const ALL: [Self; 5] = [Self::None, Self::Top, Self::Bottom, Self::Left, Self::Right];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::str::FromStr for NameAlign {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(()),
        }
    }
}

/// Canonical card configuration with every field populated.
///
/// Produced only by [`super::normalize()`]; replaced wholesale on every edit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NormalizedConfig {
    /// Target entity id; empty means "unset" (placeholder mode).
    pub entity: String,
    pub name: Option<String>,
    pub name_align: NameAlign,
    pub icon: Option<String>,
    pub hide_icon: bool,
    pub icon_size: String,
    pub track_width: String,
    pub toggle_gap: String,
    pub track_radius: String,
    pub thumb_radius: String,
    /// Hold duration in milliseconds; always finite.
    pub hold_duration: f64,
    pub on_color: Option<String>,
    pub off_color: Option<String>,
    pub unavailable_color: Option<String>,
    pub unknown_color: Option<String>,
}

impl Default for NormalizedConfig {
    fn default() -> Self {
        Self {
            entity: String::new(),
            name: None,
            name_align: NameAlign::None,
            icon: None,
            hide_icon: false,
            icon_size: DEFAULT_ICON_SIZE.to_string(),
            track_width: default_track_width(),
            toggle_gap: default_toggle_gap(),
            track_radius: default_track_radius(),
            thumb_radius: default_thumb_radius(),
            hold_duration: DEFAULT_HOLD_MS,
            on_color: None,
            off_color: None,
            unavailable_color: None,
            unknown_color: None,
        }
    }
}

impl NormalizedConfig {
    /// Whether an entity is configured.
    #[must_use]
    pub fn has_entity(&self) -> bool {
        !self.entity.is_empty()
    }

    /// Domain prefix of the configured entity, `""` when there is none.
    #[must_use]
    pub fn domain(&self) -> &str {
        domain_of(&self.entity)
    }

    /// Whether the name label should be rendered at all.
    #[must_use]
    pub fn shows_name(&self) -> bool {
        self.name_align != NameAlign::None
    }

    /// Hold duration as a [`std::time::Duration`].
    #[must_use]
    pub fn hold_timeout(&self) -> std::time::Duration {
        std::time::Duration::try_from_secs_f64(self.hold_duration / 1000.0)
            .unwrap_or_else(|_| std::time::Duration::from_millis(DEFAULT_HOLD_MS as u64))
    }
}

fn default_track_width() -> String {
    "120px".to_string()
}

fn default_toggle_gap() -> String {
    "4px".to_string()
}

fn default_track_radius() -> String {
    "26px".to_string()
}

fn default_thumb_radius() -> String {
    "22px".to_string()
}

/// Lenient field deserializers: a mismatched type becomes "absent" (or NaN
/// for numbers) instead of a deserialization error.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => Some(b),
            _ => None,
        })
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Some(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }))
    }
}
