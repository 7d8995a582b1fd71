//! Folio Tween Core (renderer-agnostic)
//!
//! A tween interpolates a set of named numeric properties from start to end
//! values over a fixed duration, shaped by a Penner easing function. The engine
//! owns no clock: a host frame loop passes its timestamp (milliseconds) to
//! [`TweenSet::update`] once per frame and reads back the produced changes.
//!
//! Configuration is built with [`TweenBuilder`] into an immutable
//! [`TweenSpec`]; per-tween runtime state lives in [`TweenState`] and is
//! advanced by the pure [`step`] function.

pub mod config;
pub mod easing;
pub mod error;
pub mod ids;
pub mod outputs;
pub mod set;
pub mod spec;
pub mod state;
pub mod stored_tween;
pub mod tween;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use easing::{Easing, EasingFn};
pub use error::TweenError;
pub use ids::{IdAllocator, TweenId};
pub use outputs::{Change, Outputs, TweenEvent};
pub use set::TweenSet;
pub use spec::{PropRange, TweenBuilder, TweenSpec};
pub use state::{step, Advance, Phase, TweenState};
pub use stored_tween::{parse_stored_tween_json, parse_stored_tween_json_with};
pub use tween::{Tween, TweenStatus};

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, TweenError>;
