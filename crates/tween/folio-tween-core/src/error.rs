//! Error types for tween construction and owner-set operations.

use thiserror::Error;

use crate::ids::TweenId;

/// Caller contract violations detected by the engine.
///
/// Runtime sampling never fails; everything here is reported either when a
/// [`crate::TweenSpec`] is built or when the owning set is asked about a tween
/// it does not hold.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum TweenError {
    /// A property was given a start value but never an end value.
    #[error("property '{property}' has a start value but no end value")]
    MissingEnd { property: String },

    /// A property was given an end value without a start value.
    #[error("property '{property}' has an end value but no start value")]
    MissingStart { property: String },

    /// Start or end value is NaN or infinite.
    #[error("property '{property}' has non-finite value {value}")]
    NonFinite { property: String, value: f64 },

    /// Duration is NaN or infinite. Zero and negative durations are legal.
    #[error("tween duration must be finite, got {duration}")]
    NonFiniteDuration { duration: f64 },

    /// The owning set holds no tween with this id (never inserted, completed, or removed).
    #[error("unknown tween: {id}")]
    UnknownTween { id: TweenId },

    /// Stored tween JSON could not be parsed.
    #[error("stored tween parse error: {reason}")]
    Parse { reason: String },
}

impl TweenError {
    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingEnd { .. }
            | Self::MissingStart { .. }
            | Self::NonFinite { .. }
            | Self::NonFiniteDuration { .. } => "validation",
            Self::UnknownTween { .. } => "owner",
            Self::Parse { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
