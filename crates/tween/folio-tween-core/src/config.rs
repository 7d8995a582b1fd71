//! Core configuration for folio-tween-core.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Defaults applied by builders and the owning set.
/// Every field has a default so adapters can pass partial JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Duration used when a builder never calls `duration()`.
    pub default_duration_ms: f64,
    /// Easing used when a builder never calls `easing()`.
    pub default_easing: Easing,
    /// Write end values into the current values when a tween completes.
    /// Off by default: the last sampled frame is what the host keeps.
    pub snap_to_end: bool,
    /// Initial capacity hint for the active tween list.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: 1000.0,
            default_easing: Easing::None,
            snap_to_end: false,
            capacity: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "snap_to_end": true }"#).unwrap();
        assert!(cfg.snap_to_end);
        assert_eq!(cfg.default_duration_ms, 1000.0);
        assert_eq!(cfg.default_easing, Easing::None);
    }

    #[test]
    fn easing_name_in_config() {
        let cfg: Config =
            serde_json::from_str(r#"{ "default_easing": "easeInOutCubic" }"#).unwrap();
        assert_eq!(cfg.default_easing, Easing::EaseInOutCubic);
    }
}
