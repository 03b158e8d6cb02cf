//! Configuration editor core
//!
//! Form logic behind the card's visual editor. Each setter performs a
//! single-field normalization against the current config and emits the full
//! result through the host's change channel. Which control renders each
//! field is decided once at construction from the host's capabilities.

use std::sync::Arc;

use crate::config::{normalize, NameAlign, NormalizedConfig, RawConfig, MAX_ICON_PX, MIN_ICON_PX};

/// Pixel value the size field shows when the stored length is unparsable.
const FALLBACK_EDITOR_PX: i64 = 80;

/// Entity domains the entity picker suggests first.
pub const SUGGESTED_DOMAINS: [&str; 3] = ["light", "switch", "fan"];

/// Receiver for the editor's change notifications.
///
/// Fired with the full normalized config after every local edit so the host
/// can persist it.
pub trait ChangeSink: Send + Sync {
    fn config_changed(&self, config: &NormalizedConfig);
}

/// Host-provided picker sub-widgets the editor may use.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostControls {
    pub entity_picker: bool,
    pub icon_picker: bool,
}

/// Control rendering a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    EntityPicker,
    IconPicker,
    TextField,
    NumberField,
    RadioRow,
}

/// One field of the editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub control: ControlKind,
}

/// Editor form state for one card configuration.
pub struct ToggleCardEditor {
    config: NormalizedConfig,
    entity_control: ControlKind,
    icon_control: ControlKind,
    sink: Arc<dyn ChangeSink>,
}

impl ToggleCardEditor {
    /// Build an editor; picker controls are selected here, once, and never
    /// re-probed.
    #[must_use]
    pub fn new(controls: HostControls, sink: Arc<dyn ChangeSink>) -> Self {
        Self {
            config: NormalizedConfig::default(),
            entity_control: if controls.entity_picker {
                ControlKind::EntityPicker
            } else {
                ControlKind::TextField
            },
            icon_control: if controls.icon_picker {
                ControlKind::IconPicker
            } else {
                ControlKind::TextField
            },
            sink,
        }
    }

    /// Adopt an externally supplied configuration without emitting a change.
    pub fn load(&mut self, raw: &RawConfig) {
        self.config = normalize(raw, None);
    }

    #[must_use]
    pub fn config(&self) -> &NormalizedConfig {
        &self.config
    }

    pub fn set_entity(&mut self, value: &str) {
        self.apply(RawConfig {
            entity: Some(value.to_string()),
            ..RawConfig::default()
        });
    }

    /// Empty input clears the override back to the friendly name.
    pub fn set_name(&mut self, value: &str) {
        self.apply(RawConfig {
            name: Some(value.to_string()),
            ..RawConfig::default()
        });
    }

    /// Unrecognized tokens are dropped without emitting a change.
    pub fn set_name_align(&mut self, value: &str) {
        if value.parse::<NameAlign>().is_err() {
            return;
        }
        self.apply(RawConfig {
            name_align: Some(value.to_string()),
            ..RawConfig::default()
        });
    }

    pub fn set_icon(&mut self, value: &str) {
        self.apply(RawConfig {
            icon: Some(value.to_string()),
            ..RawConfig::default()
        });
    }

    /// Numeric value the size field displays.
    #[must_use]
    pub fn icon_size_px(&self) -> i64 {
        crate::config::normalize::leading_int(&self.config.icon_size).unwrap_or(FALLBACK_EDITOR_PX)
    }

    /// Clamp to the allowed range and store as a `px` length; non-finite
    /// input is ignored.
    pub fn set_icon_size_px(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        #[allow(clippy::cast_possible_truncation)]
        let n = (value.round() as i64).clamp(MIN_ICON_PX, MAX_ICON_PX);
        self.apply(RawConfig {
            icon_size: Some(format!("{n}px")),
            ..RawConfig::default()
        });
    }

    /// The form layout, with controls already resolved.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor {
                key: "entity",
                label: "Entity",
                placeholder: Some("light.kitchen / switch.garage / fan.bedroom"),
                control: self.entity_control,
            },
            FieldDescriptor {
                key: "name",
                label: "Name (optional)",
                placeholder: Some("(blank = entity friendly name)"),
                control: ControlKind::TextField,
            },
            FieldDescriptor {
                key: "name_align",
                label: "Text align",
                placeholder: None,
                control: ControlKind::RadioRow,
            },
            FieldDescriptor {
                key: "icon",
                label: "Icon",
                placeholder: Some("mdi:fan"),
                control: self.icon_control,
            },
            FieldDescriptor {
                key: "icon_size",
                label: "Size (px)",
                placeholder: None,
                control: ControlKind::NumberField,
            },
        ]
    }

    /// Options for the alignment radio row.
    #[must_use]
    pub const fn alignment_options() -> [NameAlign; 5] {
        NameAlign::ALL
    }

    /// Domains the entity picker should suggest first.
    #[must_use]
    pub const fn suggested_domains() -> &'static [&'static str] {
        &SUGGESTED_DOMAINS
    }

    fn apply(&mut self, raw: RawConfig) {
        self.config = normalize(&raw, Some(&self.config));
        self.sink.config_changed(&self.config);
    }
}

impl std::fmt::Debug for ToggleCardEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleCardEditor")
            .field("config", &self.config)
            .field("entity_control", &self.entity_control)
            .field("icon_control", &self.icon_control)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        emitted: Mutex<Vec<NormalizedConfig>>,
    }

    impl ChangeSink for RecordingSink {
        fn config_changed(&self, config: &NormalizedConfig) {
            self.emitted.lock().unwrap().push(config.clone());
        }
    }

    impl RecordingSink {
        fn emitted(&self) -> Vec<NormalizedConfig> {
            self.emitted.lock().unwrap().clone()
        }
    }

    fn editor_with_sink(controls: HostControls) -> (ToggleCardEditor, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (ToggleCardEditor::new(controls, sink.clone()), sink)
    }

    #[test]
    fn setters_emit_the_full_config() {
        let (mut editor, sink) = editor_with_sink(HostControls::default());

        editor.set_entity("light.kitchen");
        editor.set_name("Kitchen");

        let emitted = sink.emitted();
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[1].entity, "light.kitchen");
        assert_eq!(emitted[1].name.as_deref(), Some("Kitchen"));
        // Untouched fields stay at their defaults in the emitted config
        assert_eq!(emitted[1].icon_size, "40px");
    }

    #[test]
    fn load_does_not_emit() {
        let (mut editor, sink) = editor_with_sink(HostControls::default());

        editor.load(&RawConfig {
            entity: Some("fan.attic".to_string()),
            ..RawConfig::default()
        });

        assert!(sink.emitted().is_empty());
        assert_eq!(editor.config().entity, "fan.attic");
    }

    #[test]
    fn clearing_name_restores_friendly_name_fallback() {
        let (mut editor, sink) = editor_with_sink(HostControls::default());

        editor.set_name("Kitchen");
        editor.set_name("");

        let emitted = sink.emitted();
        assert_eq!(emitted[0].name.as_deref(), Some("Kitchen"));
        assert_eq!(emitted[1].name, None);
    }

    #[test]
    fn invalid_alignment_is_dropped_without_a_change_event() {
        let (mut editor, sink) = editor_with_sink(HostControls::default());

        editor.set_name_align("top");
        editor.set_name_align("diagonal");

        let emitted = sink.emitted();
        assert_eq!(emitted.len(), 1);
        assert_eq!(editor.config().name_align, NameAlign::Top);
    }

    #[test]
    fn icon_size_round_trips_through_px() {
        let (mut editor, _sink) = editor_with_sink(HostControls::default());
        assert_eq!(editor.icon_size_px(), 40);

        editor.set_icon_size_px(250.0);
        assert_eq!(editor.config().icon_size, "200px");
        assert_eq!(editor.icon_size_px(), 200);

        editor.set_icon_size_px(-5.0);
        assert_eq!(editor.config().icon_size, "10px");

        editor.set_icon_size_px(f64::NAN);
        assert_eq!(editor.config().icon_size, "10px");
    }

    #[test]
    fn picker_controls_follow_host_capabilities() {
        let (rich, _) = editor_with_sink(HostControls {
            entity_picker: true,
            icon_picker: true,
        });
        let fields = rich.fields();
        assert_eq!(fields[0].control, ControlKind::EntityPicker);
        assert_eq!(fields[3].control, ControlKind::IconPicker);

        let (bare, _) = editor_with_sink(HostControls::default());
        let fields = bare.fields();
        assert_eq!(fields[0].control, ControlKind::TextField);
        assert_eq!(fields[3].control, ControlKind::TextField);
    }

    #[test]
    fn alignment_options_cover_all_tokens() {
        let options = ToggleCardEditor::alignment_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], NameAlign::None);
        assert!(options.contains(&NameAlign::Right));
    }

    #[test]
    fn entity_picker_suggests_toggleable_domains() {
        assert_eq!(
            ToggleCardEditor::suggested_domains(),
            &["light", "switch", "fan"]
        );
    }
}
