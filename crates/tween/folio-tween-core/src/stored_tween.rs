use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::Config;
use crate::spec::{TweenBuilder, TweenSpec};
use crate::Result;

/// Public API: parse stored tween JSON into a validated [`TweenSpec`] using
/// the stock [`Config`] defaults.
///
/// Shape:
/// ```json
/// { "duration": 600, "easing": "easeOutBounce",
///   "start": { "y": -40 }, "end": { "y": 0 },
///   "then": { "start": { "y": 0 }, "end": { "y": -10 } } }
/// ```
/// Notes:
/// - `duration` (ms) and `easing` are optional and fall back to the config defaults.
/// - Unknown easing names fall back to `none`, as with the builder.
/// - `then` nests recursively; each level is validated on its own.
pub fn parse_stored_tween_json(s: &str) -> Result<TweenSpec> {
    parse_stored_tween_json_with(s, &Config::default())
}

/// Variant of [`parse_stored_tween_json`] that seeds missing fields from `cfg`.
pub fn parse_stored_tween_json_with(s: &str, cfg: &Config) -> Result<TweenSpec> {
    let stored: StoredTween = serde_json::from_str(s)?;
    stored.into_spec(cfg)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredTween {
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    easing: Option<String>,
    #[serde(default)]
    start: IndexMap<String, f64>,
    #[serde(default)]
    end: IndexMap<String, f64>,
    #[serde(default)]
    then: Option<Box<StoredTween>>,
}

impl StoredTween {
    fn into_spec(self, cfg: &Config) -> Result<TweenSpec> {
        let mut builder = TweenBuilder::with_config(cfg)
            .start(self.start)
            .end(self.end);
        if let Some(ms) = self.duration {
            builder = builder.duration(ms);
        }
        if let Some(name) = self.easing.as_deref() {
            builder = builder.easing(name);
        }
        if let Some(next) = self.then {
            builder = builder.then(next.into_spec(cfg)?);
        }
        builder.build()
    }
}
