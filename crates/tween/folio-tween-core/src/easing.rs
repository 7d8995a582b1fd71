//! Penner easing functions and the named strategy table.
//!
//! Every function has the classic `(t, b, c, d)` signature:
//! - `t`: elapsed time since the tween started
//! - `b`: start value
//! - `c`: delta (end - start), not the end value
//! - `d`: duration
//!
//! Callers guarantee `d > 0` and `0 <= t < d`; the tween engine never samples
//! a finished or zero-length tween.

use serde::{Deserialize, Serialize};

/// Signature shared by all easing functions.
pub type EasingFn = fn(t: f64, b: f64, c: f64, d: f64) -> f64;

const BOUNCE_N: f64 = 7.5625;
const BOUNCE_D: f64 = 2.75;

/// Linear interpolation (no easing).
#[inline]
pub fn ease_none(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

/// Quadratic ease-in-out, split at half the duration.
#[inline]
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t + b
    } else {
        let t = t - 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

/// Cubic ease-in-out, split at half the duration.
#[inline]
pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    }
}

/// Four-segment bounce-out.
#[inline]
pub fn ease_out_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / BOUNCE_D {
        c * (BOUNCE_N * t * t) + b
    } else if t < 2.0 / BOUNCE_D {
        let t = t - 1.5 / BOUNCE_D;
        c * (BOUNCE_N * t * t + 0.75) + b
    } else if t < 2.5 / BOUNCE_D {
        let t = t - 2.25 / BOUNCE_D;
        c * (BOUNCE_N * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / BOUNCE_D;
        c * (BOUNCE_N * t * t + 0.984375) + b
    }
}

/// Named easing strategies.
///
/// Serialized by name (`"none"`, `"easeInOutQuad"`, ...). Unknown names
/// deserialize to [`Easing::None`], the same fallback as [`Easing::from_name`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Easing {
    #[default]
    None,
    EaseInOutQuad,
    EaseInOutCubic,
    EaseOutBounce,
}

impl Easing {
    /// All built-in strategies, in table order.
    pub const ALL: [Easing; 4] = [
        Easing::None,
        Easing::EaseInOutQuad,
        Easing::EaseInOutCubic,
        Easing::EaseOutBounce,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseOutBounce => "easeOutBounce",
        }
    }

    /// Exact lookup; `None` for names outside the table.
    /// `easeOutBouce` is accepted as a legacy spelling of `easeOutBounce`.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "easeInOutQuad" => Some(Self::EaseInOutQuad),
            "easeInOutCubic" => Some(Self::EaseInOutCubic),
            "easeOutBounce" | "easeOutBouce" => Some(Self::EaseOutBounce),
            _ => None,
        }
    }

    /// Permissive lookup: unknown names fall back to linear with a warning.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            log::warn!("unknown easing '{name}', falling back to 'none'");
            Self::None
        })
    }

    #[inline]
    pub fn function(&self) -> EasingFn {
        match self {
            Self::None => ease_none,
            Self::EaseInOutQuad => ease_in_out_quad,
            Self::EaseInOutCubic => ease_in_out_cubic,
            Self::EaseOutBounce => ease_out_bounce,
        }
    }

    #[inline]
    pub fn apply(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        (self.function())(t, b, c, d)
    }
}

impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        Self::from_name(s)
    }
}

impl From<String> for Easing {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<Easing> for String {
    #[inline]
    fn from(easing: Easing) -> Self {
        easing.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "left={a} right={b}");
    }

    #[test]
    fn linear_endpoints_and_midpoint() {
        assert_eq!(ease_none(0.0, 3.0, 10.0, 200.0), 3.0);
        assert_eq!(ease_none(200.0, 3.0, 10.0, 200.0), 13.0);
        assert_eq!(ease_none(100.0, 0.0, 100.0, 200.0), 50.0);
    }

    #[test]
    fn quad_and_cubic_are_symmetric_around_half() {
        for f in [ease_in_out_quad as EasingFn, ease_in_out_cubic] {
            approx(f(0.0, 0.0, 1.0, 1.0), 0.0);
            approx(f(0.5, 0.0, 1.0, 1.0), 0.5);
            approx(f(1.0, 0.0, 1.0, 1.0), 1.0);
            let lo = f(0.25, 0.0, 1.0, 1.0);
            let hi = f(0.75, 0.0, 1.0, 1.0);
            approx(lo + hi, 1.0);
            assert!(lo < 0.25, "ease-in half should lag linear");
        }
    }

    #[test]
    fn quad_and_cubic_known_values() {
        approx(ease_in_out_quad(0.25, 0.0, 1.0, 1.0), 0.125);
        approx(ease_in_out_cubic(0.25, 0.0, 1.0, 1.0), 0.0625);
    }

    #[test]
    fn bounce_segments() {
        approx(ease_out_bounce(0.0, 0.0, 1.0, 1.0), 0.0);
        // Segment boundaries touch the floor (value == end) at 1/2.75 and 2/2.75.
        approx(ease_out_bounce(1.0 / 2.75, 0.0, 1.0, 1.0), 1.0);
        approx(ease_out_bounce(2.0 / 2.75, 0.0, 1.0, 1.0), 1.0);
        // Apex of the second bounce.
        approx(ease_out_bounce(1.5 / 2.75, 0.0, 1.0, 1.0), 0.75);
        approx(ease_out_bounce(2.25 / 2.75, 0.0, 1.0, 1.0), 0.9375);
        approx(ease_out_bounce(2.625 / 2.75, 0.0, 1.0, 1.0), 0.984375);
    }

    #[test]
    fn bounce_lands_on_end_value() {
        approx(ease_out_bounce(400.0, -40.0, 40.0, 400.0), 0.0);
        approx(ease_out_bounce(1.0, 2.0, 5.0, 1.0), 7.0);
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for e in Easing::ALL {
            assert_eq!(Easing::lookup(e.name()), Some(e));
        }
        assert_eq!(Easing::lookup("easeOutBouce"), Some(Easing::EaseOutBounce));
        assert_eq!(Easing::lookup("elastic"), None);
    }

    #[test]
    fn unknown_name_falls_back_to_none() {
        assert_eq!(Easing::from_name("easeInElastic"), Easing::None);
        assert_eq!(Easing::from(""), Easing::None);
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&Easing::EaseOutBounce).unwrap();
        assert_eq!(json, "\"easeOutBounce\"");
        let e: Easing = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(e, Easing::None);
    }
}
