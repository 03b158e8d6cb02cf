//! Derived presentation values
//!
//! [`derive`] is a pure function of the normalized configuration and an
//! optional live state snapshot. Every branch is total: entity set but
//! unknown to the host, entity unset with overrides, and every state string
//! all have a defined output.

use crate::config::NormalizedConfig;
use crate::state::{EntityState, STATE_OFF, STATE_ON, STATE_UNAVAILABLE, STATE_UNKNOWN};

use super::icons::{domain_icon, IconCatalog, PLACEHOLDER_ICON};
use super::ThemeColor;

/// Display name used while no entity is configured.
pub const PLACEHOLDER_NAME: &str = "Vertical toggle";

/// Everything the renderer needs for one frame.
///
/// Recomputed on every render; carries no identity between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPresentation {
    /// Resolved display name. Returned even when `name_align` suppresses
    /// rendering; visibility is [`NormalizedConfig::shows_name`]'s concern.
    pub name: String,
    /// Track/active color as a CSS value.
    pub active_color: String,
    /// Icon color as a CSS value.
    pub icon_color: String,
    /// Resolved icon identifier.
    pub icon: String,
    /// True when no entity is configured or its state cannot be resolved.
    pub is_placeholder: bool,
    /// True only for a live state of `"on"`.
    pub is_on: bool,
}

/// Compute the presentation for one render.
#[must_use]
pub fn derive(
    config: &NormalizedConfig,
    state: Option<&EntityState>,
    icons: &dyn IconCatalog,
) -> DerivedPresentation {
    DerivedPresentation {
        name: resolve_name(config, state),
        active_color: resolve_active_color(config, state),
        icon_color: resolve_icon_color(config, state),
        icon: resolve_icon(config, state, icons),
        is_placeholder: !config.has_entity() || state.is_none(),
        is_on: state.is_some_and(EntityState::is_on),
    }
}

fn resolve_name(config: &NormalizedConfig, state: Option<&EntityState>) -> String {
    if let Some(name) = &config.name {
        return name.clone();
    }
    if !config.has_entity() {
        return PLACEHOLDER_NAME.to_string();
    }
    state
        .and_then(EntityState::friendly_name)
        .unwrap_or_default()
        .to_string()
}

fn resolve_active_color(config: &NormalizedConfig, state: Option<&EntityState>) -> String {
    if !config.has_entity() {
        return ThemeColor::Attention.css().to_string();
    }
    let Some(state) = state else {
        return ThemeColor::Active.css().to_string();
    };

    let override_color = match state.state.as_str() {
        STATE_ON => config.on_color.as_ref(),
        STATE_OFF => config.off_color.as_ref(),
        STATE_UNAVAILABLE => config.unavailable_color.as_ref(),
        STATE_UNKNOWN => config.unknown_color.as_ref(),
        _ => None,
    };
    if let Some(color) = override_color {
        return color.clone();
    }

    let token = match state.state.as_str() {
        STATE_UNAVAILABLE => ThemeColor::Error,
        STATE_UNKNOWN => ThemeColor::Warning,
        STATE_ON => match config.domain() {
            "fan" => ThemeColor::Info,
            "switch" => ThemeColor::Success,
            _ => ThemeColor::Active,
        },
        _ => ThemeColor::Inactive,
    };
    token.css().to_string()
}

fn resolve_icon_color(config: &NormalizedConfig, state: Option<&EntityState>) -> String {
    let live = if config.has_entity() { state } else { None };
    let Some(state) = live else {
        return ThemeColor::SecondaryText.css().to_string();
    };
    if !state.is_on() {
        return ThemeColor::SecondaryText.css().to_string();
    }

    if config.domain() == "light" {
        // RGB wins over HS when both attributes are present
        if let Some((r, g, b)) = state.rgb_color() {
            return format!("rgb({r}, {g}, {b})");
        }
        if let Some((h, s)) = state.hs_color() {
            return format!("hsl({h}, {s}%, 50%)");
        }
    }

    ThemeColor::PrimaryText.css().to_string()
}

fn resolve_icon(
    config: &NormalizedConfig,
    state: Option<&EntityState>,
    icons: &dyn IconCatalog,
) -> String {
    if let Some(icon) = &config.icon {
        return icon.clone();
    }
    if !config.has_entity() {
        return PLACEHOLDER_ICON.to_string();
    }
    if let Some(state) = state {
        if let Some(icon) = icons.state_icon(&config.entity, state) {
            return icon;
        }
        if let Some(icon) = state.icon() {
            return icon.to_string();
        }
    }
    domain_icon(config.domain()).to_string()
}
