//! Vertical toggle card core
//!
//! Configuration normalization, presentation derivation, and interaction
//! logic for a vertical toggle dashboard card and its visual editor. The
//! dashboard host owns rendering, persistence, and service execution; this
//! crate owns everything between the host's raw config/state objects and
//! the values a renderer needs.
//!
//! The core is deliberately total: malformed configuration degrades to
//! defaults, an unresolvable entity is a first-class placeholder state, and
//! derivation is a pure function of its inputs.

pub mod actions;
pub mod card;
pub mod config;
pub mod editor;
pub mod gesture;
pub mod presentation;
pub mod state;

pub use actions::{ActionDispatcher, HostActions};
pub use card::{descriptor, stub_config, CardDescriptor, ToggleCard, CARD_TYPE};
pub use config::{normalize, ConfigError, NameAlign, NormalizedConfig, RawConfig};
pub use editor::{ChangeSink, HostControls, ToggleCardEditor};
pub use gesture::{GestureAction, GestureInput, HoldGesture, HoldState};
pub use presentation::{derive, DerivedPresentation, IconCatalog, NullIconCatalog, ThemeColor};
pub use state::{domain_of, EntityState, StateView};
