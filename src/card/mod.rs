//! Card shell
//!
//! Ties the configuration, state derivation, gesture machine, and action
//! dispatch together for one card instance, and carries the metadata the
//! host's card picker needs.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::actions::{ActionDispatcher, HostActions};
use crate::config::{normalize, NormalizedConfig, RawConfig};
use crate::gesture::{GestureAction, GestureSink, HoldGesture};
use crate::presentation::{derive, DerivedPresentation, IconCatalog, NullIconCatalog};
use crate::state::{EntityState, StateView};

/// Type identifier the host uses to route configs to this card.
pub const CARD_TYPE: &str = "custom:vertical-toggle-card";

/// Picker metadata for this card type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDescriptor {
    pub type_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Metadata shown in the host's card picker.
#[must_use]
pub const fn descriptor() -> CardDescriptor {
    CardDescriptor {
        type_id: CARD_TYPE,
        name: "Vertical Toggle Card",
        description: "Vertical toggle for lights, switches, and fans. \
                      Press and hold for more information.",
    }
}

/// Minimal configuration the host's picker starts from.
#[must_use]
pub fn stub_config() -> Value {
    json!({ "type": CARD_TYPE, "entity": "" })
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared view of the card the gesture timer task dispatches against.
struct GestureRelay {
    config: Mutex<NormalizedConfig>,
    last_state: Mutex<Option<EntityState>>,
    dispatcher: ActionDispatcher,
}

#[async_trait]
impl GestureSink for GestureRelay {
    async fn on_gesture(&self, action: GestureAction) {
        let config = lock(&self.config).clone();
        let state = lock(&self.last_state).clone();
        match action {
            GestureAction::Activate => self.dispatcher.activate(&config, state.as_ref()).await,
            GestureAction::RequestDetail => self.dispatcher.request_detail(&config).await,
        }
    }
}

/// One vertical toggle card instance.
pub struct ToggleCard {
    relay: Arc<GestureRelay>,
    icons: Arc<dyn IconCatalog>,
    gesture: HoldGesture,
}

impl ToggleCard {
    /// Card without a computed-icon capability.
    #[must_use]
    pub fn new(host: Arc<dyn HostActions>) -> Self {
        Self::with_icon_catalog(host, Arc::new(NullIconCatalog))
    }

    /// Card with the host's computed-icon mechanism injected.
    #[must_use]
    pub fn with_icon_catalog(host: Arc<dyn HostActions>, icons: Arc<dyn IconCatalog>) -> Self {
        let relay = Arc::new(GestureRelay {
            config: Mutex::new(NormalizedConfig::default()),
            last_state: Mutex::new(None),
            dispatcher: ActionDispatcher::new(host),
        });
        let gesture = HoldGesture::new(Arc::clone(&relay) as Arc<dyn GestureSink>);
        Self {
            relay,
            icons,
            gesture,
        }
    }

    /// Replace the configuration wholesale with a fresh normalization.
    pub fn set_config(&self, raw: &RawConfig) {
        *lock(&self.relay.config) = normalize(raw, None);
    }

    #[must_use]
    pub fn config(&self) -> NormalizedConfig {
        lock(&self.relay.config).clone()
    }

    /// Derive the presentation for one render tick.
    ///
    /// Reads at most the configured entity's entry from the view; the
    /// snapshot is also kept for gesture dispatch.
    #[must_use]
    pub fn presentation(&self, view: &StateView) -> DerivedPresentation {
        let config = self.config();
        let state = view.lookup(&config).cloned();
        let derived = derive(&config, state.as_ref(), self.icons.as_ref());
        *lock(&self.relay.last_state) = state;
        derived
    }

    /// CSS custom properties the host renderer applies to the card root.
    #[must_use]
    pub fn style_vars(&self, view: &StateView) -> Vec<(&'static str, String)> {
        let config = self.config();
        let derived = self.presentation(view);
        vec![
            ("--track-width", config.track_width),
            ("--toggle-gap", config.toggle_gap),
            ("--track-radius", config.track_radius),
            ("--thumb-radius", config.thumb_radius),
            ("--icon-size", config.icon_size),
            ("--active-color", derived.active_color),
        ]
    }

    /// Pointer pressed on the toggle.
    pub async fn pointer_down(&mut self) {
        let timeout = self.config().hold_timeout();
        self.gesture.pointer_down(timeout).await;
    }

    /// Pointer released: taps activate, completed holds stay silent.
    pub async fn pointer_up(&mut self) {
        self.gesture.pointer_up().await;
    }

    /// Pointer left the toggle: cancel the pending gesture.
    pub async fn pointer_leave(&mut self) {
        self.gesture.pointer_leave().await;
    }

    /// Immediately request the detail view (the context-menu path).
    pub async fn request_detail(&self) {
        let config = self.config();
        self.relay.dispatcher.request_detail(&config).await;
    }
}

impl std::fmt::Debug for ToggleCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleCard")
            .field("config", &*lock(&self.relay.config))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::RecordingHost;
    use crate::state::STATE_ON;
    use serde_json::json;

    fn card_with_host() -> (ToggleCard, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::default());
        (ToggleCard::new(host.clone()), host)
    }

    fn configured_card(entity: &str) -> (ToggleCard, Arc<RecordingHost>) {
        let (card, host) = card_with_host();
        card.set_config(&RawConfig {
            entity: Some(entity.to_string()),
            ..RawConfig::default()
        });
        (card, host)
    }

    #[test]
    fn stub_config_is_type_tagged() {
        let stub = stub_config();
        assert_eq!(stub["type"], json!(CARD_TYPE));
        assert_eq!(stub["entity"], json!(""));

        // The stub itself is a valid raw configuration
        let raw = RawConfig::from_value(&stub).unwrap();
        let config = normalize(&raw, None);
        assert!(!config.has_entity());
    }

    #[test]
    fn presentation_reads_the_configured_entity() {
        let (card, _host) = configured_card("light.kitchen");

        let mut view = StateView::new();
        view.insert("light.kitchen", EntityState::with_state(STATE_ON));
        view.insert("light.hallway", EntityState::with_state("off"));

        let derived = card.presentation(&view);
        assert!(derived.is_on);
        assert!(!derived.is_placeholder);
    }

    #[test]
    fn style_vars_carry_layout_and_active_color() {
        let (card, _host) = configured_card("switch.garage");
        let mut view = StateView::new();
        view.insert("switch.garage", EntityState::with_state(STATE_ON));

        let vars = card.style_vars(&view);
        assert!(vars.contains(&("--track-width", "120px".to_string())));
        assert!(vars.contains(&("--icon-size", "40px".to_string())));
        assert!(vars.contains(&("--active-color", "var(--success-color)".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn tap_toggles_through_the_host() {
        let (mut card, host) = configured_card("light.kitchen");

        let mut view = StateView::new();
        view.insert("light.kitchen", EntityState::with_state(STATE_ON));
        let _ = card.presentation(&view);

        card.pointer_down().await;
        tokio::time::advance(std::time::Duration::from_millis(100)).await;
        card.pointer_up().await;

        assert_eq!(host.recorded(), vec!["call:light.turn_off:light.kitchen"]);
    }

    #[tokio::test(start_paused = true)]
    async fn hold_requests_detail_instead_of_toggling() {
        let (mut card, host) = configured_card("light.kitchen");

        let mut view = StateView::new();
        view.insert("light.kitchen", EntityState::with_state(STATE_ON));
        let _ = card.presentation(&view);

        card.pointer_down().await;
        tokio::time::advance(std::time::Duration::from_millis(900)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        card.pointer_up().await;

        assert_eq!(host.recorded(), vec!["more-info:light.kitchen"]);
    }

    #[tokio::test]
    async fn gestures_without_state_do_not_call_services() {
        let (mut card, host) = configured_card("light.kitchen");

        // No presentation tick: no live state recorded
        card.pointer_down().await;
        card.pointer_up().await;

        assert!(host.recorded().is_empty());
    }

    #[tokio::test]
    async fn request_detail_is_noop_when_unconfigured() {
        let (card, host) = card_with_host();
        card.request_detail().await;
        assert!(host.recorded().is_empty());
    }
}
