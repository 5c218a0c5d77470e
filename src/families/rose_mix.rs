//! Superposition of two rose terms.

use super::{laps_span, Center, CurveFamily, Turns, Wave};
use crate::primitives::Point2;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// One rose term `A · F(kθ + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoseTerm {
    #[serde(rename = "A")]
    pub amplitude: f64,
    pub k: f64,
    pub phi: f64,
    pub variant: Wave,
}

impl RoseTerm {
    pub fn new(amplitude: f64, k: f64, phi: f64, variant: Wave) -> Self {
        Self {
            amplitude,
            k,
            phi,
            variant,
        }
    }

    #[inline]
    fn eval(&self, theta: f64) -> f64 {
        self.amplitude * self.variant.eval(self.k * theta + self.phi)
    }
}

/// Parameters of a two-term rose mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoseMixParams {
    pub term1: RoseTerm,
    pub term2: RoseTerm,
    pub turns: Turns,
    pub center: Center,
    /// Global rotation in radians, added to θ.
    pub rot: f64,
}

impl Default for RoseMixParams {
    fn default() -> Self {
        Self {
            term1: RoseTerm::new(120.0, 5.0, 0.0, Wave::Cos),
            term2: RoseTerm::new(60.0, 9.0, PI / 6.0, Wave::Cos),
            turns: Turns::Auto,
            center: Center::default(),
            rot: 0.0,
        }
    }
}

impl ParametricCurve for RoseMixParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, laps_span(self.turns))
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        let theta = t + self.rot;
        let r = self.term1.eval(theta) + self.term2.eval(theta);
        Point2::new(
            self.center.x + r * theta.cos(),
            self.center.y + r * theta.sin(),
        )
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.7)
    }
}

impl CurveFamily for RoseMixParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        Some(TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::QualityConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_term_is_a_rose() {
        let params = RoseMixParams {
            term2: RoseTerm::new(0.0, 9.0, 0.0, Wave::Cos),
            ..RoseMixParams::default()
        };
        let p = params.eval(0.0);
        assert_relative_eq!(p.x, 120.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn test_rotation_and_center() {
        let params = RoseMixParams {
            term1: RoseTerm::new(10.0, 0.0, 0.0, Wave::Cos),
            term2: RoseTerm::default(),
            center: Center { x: 5.0, y: 5.0 },
            rot: PI / 2.0,
            turns: Turns::Auto,
        };
        let p = params.eval(0.0);
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 15.0);
    }

    #[test]
    fn test_default_mix_closes() {
        let sampled = RoseMixParams::default().sample(&QualityConfig::default());
        assert!(sampled.path.closed);
        assert_relative_eq!(sampled.stats.period.unwrap(), TAU);
    }
}
