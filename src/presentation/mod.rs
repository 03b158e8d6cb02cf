//! Presentation derivation
//!
//! Pure computation of everything the host renderer needs per frame: display
//! name, track color, icon color, and the resolved icon.

pub mod derive;
pub mod icons;

pub use derive::{derive, DerivedPresentation, PLACEHOLDER_NAME};
pub use icons::{domain_icon, IconCatalog, NullIconCatalog, PLACEHOLDER_ICON};

/// Color tokens resolved by the host theme at render time.
///
/// The card never sees concrete color values for these; it emits CSS
/// custom-property references the way the host's other cards do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    /// Placeholder/unconfigured marker, distinct from every state color.
    Attention,
    Active,
    Inactive,
    Error,
    Warning,
    Info,
    Success,
    PrimaryText,
    SecondaryText,
}

impl ThemeColor {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Attention => "var(--accent-color)",
            Self::Active => "var(--state-active-color)",
            Self::Inactive => "var(--state-inactive-color)",
            Self::Error => "var(--error-color)",
            Self::Warning => "var(--warning-color)",
            Self::Info => "var(--info-color)",
            Self::Success => "var(--success-color)",
            Self::PrimaryText => "var(--primary-text-color)",
            Self::SecondaryText => "var(--secondary-text-color)",
        }
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css())
    }
}
