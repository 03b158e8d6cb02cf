//! Card configuration
//!
//! Untrusted input shape, the canonical normalized record, and the
//! normalization boundary between them.

pub mod normalize;
pub mod schema;

pub use normalize::{normalize, MAX_ICON_PX, MIN_ICON_PX};
pub use schema::{NameAlign, NormalizedConfig, RawConfig, DEFAULT_HOLD_MS, DEFAULT_ICON_SIZE};

use thiserror::Error;

/// Errors raised at the host configuration boundary.
///
/// Normalization itself never fails; this only covers payloads that are not
/// configuration objects at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("card configuration must be a JSON object")]
    InvalidPayload,
}
