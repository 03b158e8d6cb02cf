//! Host-owned entity state
//!
//! Read-only snapshots of the entities the dashboard host tracks. The card
//! never mutates these; it reads at most one entry per render.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State string reported while an entity is switched on.
pub const STATE_ON: &str = "on";
/// State string reported while an entity is switched off.
pub const STATE_OFF: &str = "off";
/// State string for an entity the host cannot reach.
pub const STATE_UNAVAILABLE: &str = "unavailable";
/// State string for an entity whose state is indeterminate.
pub const STATE_UNKNOWN: &str = "unknown";

/// Domain prefix of an entity id (`"light.kitchen"` -> `"light"`).
///
/// An id without a separator has no domain and yields `""`.
#[must_use]
pub fn domain_of(entity_id: &str) -> &str {
    entity_id.split_once('.').map_or("", |(domain, _)| domain)
}

/// Snapshot of a single entity as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntityState {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EntityState {
    /// Build a snapshot with the given state string and no attributes.
    #[must_use]
    pub fn with_state(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state == STATE_ON
    }

    /// Human-readable name attribute, when the host supplies one.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes.get("friendly_name")?.as_str()
    }

    /// Icon attribute set on the entity itself.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.attributes.get("icon")?.as_str()
    }

    /// RGB color attribute, when present and well-formed.
    #[must_use]
    pub fn rgb_color(&self) -> Option<(u8, u8, u8)> {
        let channels = self.attributes.get("rgb_color")?.as_array()?;
        let mut channels = channels.iter().filter_map(Value::as_u64);
        #[allow(clippy::cast_possible_truncation)]
        let mut next = || channels.next().map(|c| c.min(255) as u8);
        Some((next()?, next()?, next()?))
    }

    /// Hue/saturation color attribute, when present and well-formed.
    #[must_use]
    pub fn hs_color(&self) -> Option<(f64, f64)> {
        let parts = self.attributes.get("hs_color")?.as_array()?;
        let mut parts = parts.iter().filter_map(Value::as_f64);
        Some((parts.next()?, parts.next()?))
    }
}

/// The host's entity-id to state mapping for one update tick.
#[derive(Debug, Clone, Default)]
pub struct StateView {
    states: HashMap<String, EntityState>,
}

impl StateView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, state: EntityState) {
        self.states.insert(entity_id.into(), state);
    }

    /// Snapshot for one entity id, `None` when the host does not know it.
    #[must_use]
    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    /// Snapshot for a configured entity; `None` for an unset entity.
    #[must_use]
    pub fn lookup(&self, config: &crate::config::NormalizedConfig) -> Option<&EntityState> {
        if config.has_entity() {
            self.get(&config.entity)
        } else {
            None
        }
    }
}
