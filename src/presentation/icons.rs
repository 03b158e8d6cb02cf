//! Icon resolution
//!
//! The host may expose a computed-state icon mechanism (icon varies with the
//! live state, e.g. a half-open cover). That capability is injected once as
//! an [`IconCatalog`]; hosts without it use [`NullIconCatalog`] and the card
//! falls back to entity attributes and the domain table.

use crate::state::EntityState;

/// Icon shown while no entity is configured.
pub const PLACEHOLDER_ICON: &str = "mdi:help-circle";

/// Generic fallback for domains without a dedicated icon.
pub const FALLBACK_ICON: &str = "mdi:power";

/// Host capability for computing state-dependent icons.
pub trait IconCatalog: Send + Sync {
    /// Icon for the entity in its current state, if the host computes one.
    fn state_icon(&self, entity_id: &str, state: &EntityState) -> Option<String>;
}

/// Catalog for hosts without a computed-icon mechanism.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullIconCatalog;

impl IconCatalog for NullIconCatalog {
    fn state_icon(&self, _entity_id: &str, _state: &EntityState) -> Option<String> {
        None
    }
}

/// Static per-domain fallback icon.
#[must_use]
pub fn domain_icon(domain: &str) -> &'static str {
    match domain {
        "light" => "mdi:lightbulb",
        "fan" => "mdi:fan",
        "switch" => "mdi:toggle-switch",
        _ => FALLBACK_ICON,
    }
}
