//! Action dispatch
//!
//! Thin pass-through from user interaction to the host's service-call and
//! more-info channels. Calls are fire-and-forget; whether the underlying
//! service succeeds is the host's concern.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::NormalizedConfig;
use crate::state::EntityState;

pub const SERVICE_TOGGLE: &str = "toggle";
pub const SERVICE_TURN_ON: &str = "turn_on";
pub const SERVICE_TURN_OFF: &str = "turn_off";

/// Host channels the card can invoke.
#[async_trait]
pub trait HostActions: Send + Sync {
    /// Request a `domain.service` invocation against an entity.
    async fn call_service(&self, domain: &str, service: &str, entity_id: &str);

    /// Request the host show detailed information for an entity.
    async fn show_more_info(&self, entity_id: &str);
}

/// Maps gestures to host requests for one card instance.
#[derive(Clone)]
pub struct ActionDispatcher {
    host: Arc<dyn HostActions>,
}

impl ActionDispatcher {
    #[must_use]
    pub fn new(host: Arc<dyn HostActions>) -> Self {
        Self { host }
    }

    /// Toggle the configured entity.
    ///
    /// No-op without a configured entity or a live state. Fans use the
    /// domain's toggle service; everything else turns off when on and on
    /// otherwise. Safe to call repeatedly.
    pub async fn activate(&self, config: &NormalizedConfig, state: Option<&EntityState>) {
        if !config.has_entity() {
            return;
        }
        let Some(state) = state else {
            return;
        };

        let service = if config.domain() == "fan" {
            SERVICE_TOGGLE
        } else if state.is_on() {
            SERVICE_TURN_OFF
        } else {
            SERVICE_TURN_ON
        };

        self.host
            .call_service(config.domain(), service, &config.entity)
            .await;
    }

    /// Ask the host to show the entity's detail view; no-op when
    /// unconfigured.
    pub async fn request_detail(&self, config: &NormalizedConfig) {
        if !config.has_entity() {
            return;
        }
        self.host.show_more_info(&config.entity).await;
    }
}
