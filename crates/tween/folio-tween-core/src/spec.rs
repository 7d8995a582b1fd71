//! Tween configuration: a fluent builder and the validated, immutable spec it produces.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::easing::Easing;
use crate::error::TweenError;
use crate::Result;

/// Start and end value of one property.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropRange {
    pub start: f64,
    pub end: f64,
}

impl PropRange {
    /// The `c` argument of an easing function.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.end - self.start
    }
}

/// Immutable tween configuration.
///
/// Only [`TweenBuilder::build`] creates one, so every property is guaranteed
/// to have a finite start and end value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TweenSpec {
    duration_ms: f64,
    easing: Easing,
    properties: IndexMap<String, PropRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    then: Option<Box<TweenSpec>>,
}

impl TweenSpec {
    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Properties in the order they were first started.
    #[inline]
    pub fn properties(&self) -> &IndexMap<String, PropRange> {
        &self.properties
    }

    #[inline]
    pub fn property(&self, name: &str) -> Option<PropRange> {
        self.properties.get(name).copied()
    }

    /// Follow-up tween enqueued by the owning set when this one completes.
    #[inline]
    pub fn then(&self) -> Option<&TweenSpec> {
        self.then.as_deref()
    }

    /// Sample every property at `elapsed` ms. Caller guarantees `0 <= elapsed < duration`.
    pub(crate) fn sample_into(&self, elapsed: f64, out: &mut IndexMap<String, f64>) {
        for (name, range) in &self.properties {
            let value = self
                .easing
                .apply(elapsed, range.start, range.delta(), self.duration_ms);
            if let Some(slot) = out.get_mut(name) {
                *slot = value;
            }
        }
    }

    /// Start values keyed like `properties`.
    pub(crate) fn start_values(&self) -> IndexMap<String, f64> {
        self.properties
            .iter()
            .map(|(k, r)| (k.clone(), r.start))
            .collect()
    }
}

/// Fluent builder: `duration → easing → start → end → build`.
///
/// `start`/`end` merge into what was registered before; a repeated key keeps
/// the most recent value.
#[derive(Clone, Debug)]
pub struct TweenBuilder {
    duration_ms: f64,
    easing: Easing,
    starts: IndexMap<String, f64>,
    ends: IndexMap<String, f64>,
    then: Option<TweenSpec>,
}

impl Default for TweenBuilder {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl TweenBuilder {
    /// Builder seeded with the stock defaults (1000 ms, linear).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with the duration and easing defaults from `cfg`.
    pub fn with_config(cfg: &Config) -> Self {
        Self {
            duration_ms: cfg.default_duration_ms,
            easing: cfg.default_easing,
            starts: IndexMap::new(),
            ends: IndexMap::new(),
            then: None,
        }
    }

    /// Animation length in milliseconds. Not validated for sign: a zero or
    /// negative duration completes on the first update.
    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Select easing by name; unknown names fall back to `none`.
    pub fn easing(mut self, name: &str) -> Self {
        self.easing = Easing::from_name(name);
        self
    }

    pub fn easing_kind(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start<I, K>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        for (k, v) in props {
            self.starts.insert(k.into(), v);
        }
        self
    }

    pub fn end<I, K>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        for (k, v) in props {
            self.ends.insert(k.into(), v);
        }
        self
    }

    /// Chain a follow-up tween that starts once this one completes.
    pub fn then(mut self, next: TweenSpec) -> Self {
        self.then = Some(next);
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<TweenSpec> {
        if !self.duration_ms.is_finite() {
            return Err(TweenError::NonFiniteDuration {
                duration: self.duration_ms,
            });
        }
        if let Some(orphan) = self.ends.keys().find(|k| !self.starts.contains_key(*k)) {
            return Err(TweenError::MissingStart {
                property: orphan.clone(),
            });
        }

        let mut properties = IndexMap::with_capacity(self.starts.len());
        for (name, start) in self.starts {
            let end = match self.ends.get(&name) {
                Some(end) => *end,
                None => return Err(TweenError::MissingEnd { property: name }),
            };
            for value in [start, end] {
                if !value.is_finite() {
                    return Err(TweenError::NonFinite {
                        property: name,
                        value,
                    });
                }
            }
            properties.insert(name, PropRange { start, end });
        }

        Ok(TweenSpec {
            duration_ms: self.duration_ms,
            easing: self.easing,
            properties,
            then: self.then.map(Box::new),
        })
    }
}
