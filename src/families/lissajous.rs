//! Lissajous figures: `x = A sin(a t + δ)`, `y = B sin(b t)`.

use super::{CurveFamily, Turns};
use crate::primitives::Point2;
use crate::ratio::gcd_rounded;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a Lissajous figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LissajousParams {
    /// Horizontal amplitude.
    #[serde(rename = "A")]
    pub a_amp: f64,
    /// Vertical amplitude.
    #[serde(rename = "B")]
    pub b_amp: f64,
    /// Horizontal frequency.
    pub a: f64,
    /// Vertical frequency.
    pub b: f64,
    /// Phase shift of the horizontal term, in radians.
    pub delta: f64,
    pub turns: Turns,
}

impl Default for LissajousParams {
    fn default() -> Self {
        Self {
            a_amp: 120.0,
            b_amp: 120.0,
            a: 3.0,
            b: 2.0,
            delta: 0.0,
            turns: Turns::Auto,
        }
    }
}

impl LissajousParams {
    /// Closure period `2π · |b| / gcd(a, b)`, with the GCD taken on rounded
    /// frequencies. A vanishing `b` counts as one cycle.
    pub fn base_period(&self) -> f64 {
        let cycles = self.b.abs() / gcd_rounded(self.a, self.b);
        if cycles.is_finite() && cycles > 1e-9 {
            TAU * cycles
        } else {
            TAU
        }
    }
}

impl ParametricCurve for LissajousParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, self.base_period() * self.turns.multiplier())
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        Point2::new(
            self.a_amp * (self.a * t + self.delta).sin(),
            self.b_amp * (self.b * t).sin(),
        )
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.5)
    }
}

impl CurveFamily for LissajousParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        Some(self.base_period())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::QualityConfig;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_period() {
        let p = LissajousParams::default();
        assert_relative_eq!(p.base_period(), 4.0 * PI);

        let coprime = LissajousParams {
            a: 5.0,
            b: 4.0,
            ..p.clone()
        };
        assert_relative_eq!(coprime.base_period(), 8.0 * PI);

        let shared = LissajousParams {
            a: 6.0,
            b: 4.0,
            ..p.clone()
        };
        assert_relative_eq!(shared.base_period(), 4.0 * PI);
    }

    #[test]
    fn test_zero_b_is_one_cycle() {
        let p = LissajousParams {
            b: 0.0,
            ..LissajousParams::default()
        };
        assert_relative_eq!(p.base_period(), TAU);
        let sampled = p.sample(&QualityConfig::default());
        assert!(sampled.stats.vertices > 1);
        for pt in sampled.points() {
            assert_eq!(pt.y, 0.0);
        }
    }

    #[test]
    fn test_turns_extend_domain() {
        let p = LissajousParams {
            turns: Turns::Laps(3),
            ..LissajousParams::default()
        };
        assert_relative_eq!(p.domain().end, 12.0 * PI);
        assert_relative_eq!(p.period().unwrap(), 4.0 * PI);
    }

    #[test]
    fn test_bbox_matches_amplitudes() {
        let p = LissajousParams::default();
        let bbox = p.sample(&QualityConfig::default()).bbox.unwrap();
        assert_relative_eq!(bbox.max.x, 120.0, epsilon = 0.05);
        assert_relative_eq!(bbox.min.y, -120.0, epsilon = 0.05);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let p: LissajousParams = serde_json::from_str(r#"{ "A": 80, "turns": 2 }"#).unwrap();
        assert_eq!(p.a_amp, 80.0);
        assert_eq!(p.b_amp, 120.0);
        assert_eq!(p.turns, Turns::Laps(2));
    }
}
