//! Configuration normalization
//!
//! The single boundary that turns an untrusted [`RawConfig`] into a
//! [`NormalizedConfig`]. Every field resolves independently; invalid input
//! degrades to "keep the previous value" or "use the default", never to an
//! error. A missing entity is a valid placeholder state, not a failure.

use lazy_static::lazy_static;
use regex::Regex;

use super::schema::{NormalizedConfig, RawConfig, DEFAULT_HOLD_MS};

/// Smallest icon size accepted by the editor, in pixels.
pub const MIN_ICON_PX: i64 = 10;
/// Largest icon size accepted by the editor, in pixels.
pub const MAX_ICON_PX: i64 = 200;

lazy_static! {
    static ref LEADING_INT: Regex = Regex::new(r"^\s*(-?\d+)").expect("literal pattern");
}

/// Resolve a raw configuration against a previous one.
///
/// With `previous = None` absent fields take their defaults; with a previous
/// config this implements the editor's single-field update: every field the
/// raw input does not supply keeps its prior value.
#[must_use]
pub fn normalize(raw: &RawConfig, previous: Option<&NormalizedConfig>) -> NormalizedConfig {
    let base = previous.cloned().unwrap_or_default();

    NormalizedConfig {
        entity: raw
            .entity
            .as_deref()
            .map_or(base.entity, |value| value.trim().to_string()),
        name: text_override(raw.name.as_deref(), base.name),
        name_align: raw
            .name_align
            .as_deref()
            .and_then(|token| token.parse().ok())
            .unwrap_or(base.name_align),
        icon: text_override(raw.icon.as_deref(), base.icon),
        hide_icon: raw.hide_icon.unwrap_or(base.hide_icon),
        icon_size: raw
            .icon_size
            .as_deref()
            .and_then(clamp_px_length)
            .unwrap_or(base.icon_size),
        track_width: raw.track_width.clone().unwrap_or(base.track_width),
        toggle_gap: raw.toggle_gap.clone().unwrap_or(base.toggle_gap),
        track_radius: raw.track_radius.clone().unwrap_or(base.track_radius),
        thumb_radius: raw.thumb_radius.clone().unwrap_or(base.thumb_radius),
        hold_duration: raw
            .hold_duration
            .map_or(base.hold_duration, |ms| {
                if ms.is_finite() {
                    ms
                } else {
                    DEFAULT_HOLD_MS
                }
            }),
        on_color: text_override(raw.on_color.as_deref(), base.on_color),
        off_color: text_override(raw.off_color.as_deref(), base.off_color),
        unavailable_color: text_override(raw.unavailable_color.as_deref(), base.unavailable_color),
        unknown_color: text_override(raw.unknown_color.as_deref(), base.unknown_color),
    }
}

/// A supplied empty string clears the override; an absent field keeps the
/// fallback.
fn text_override(value: Option<&str>, fallback: Option<String>) -> Option<String> {
    match value {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => fallback,
    }
}

/// Parse the leading integer of a length like `"40px"` or `"40"`.
pub(crate) fn leading_int(raw: &str) -> Option<i64> {
    let captures = LEADING_INT.captures(raw)?;
    captures[1].parse().ok()
}

/// Clamp a pixel length to the editor range and re-emit as `"<n>px"`.
/// Non-numeric input yields `None` (field unchanged).
fn clamp_px_length(raw: &str) -> Option<String> {
    let n = leading_int(raw)?.clamp(MIN_ICON_PX, MAX_ICON_PX);
    Some(format!("{n}px"))
}
