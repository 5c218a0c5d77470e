//! Gielis superformula.

use super::{laps_span, nonzero, CurveFamily, Turns};
use crate::primitives::Point2;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a superformula shape.
///
/// `r(θ) = scale / (|cos(mθ/4)/a|^n2 + |sin(mθ/4)/b|^n3)^(1/n1)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperformulaParams {
    /// Rotational symmetry.
    pub m: f64,
    pub a: f64,
    pub b: f64,
    pub n1: f64,
    pub n2: f64,
    pub n3: f64,
    pub scale: f64,
    pub turns: Turns,
}

impl Default for SuperformulaParams {
    fn default() -> Self {
        Self {
            m: 6.0,
            a: 1.0,
            b: 1.0,
            n1: 0.3,
            n2: 1.7,
            n3: 1.7,
            scale: 140.0,
            turns: Turns::Auto,
        }
    }
}

impl SuperformulaParams {
    /// Radius at `theta`. Zero `a`, `b`, `n1` or a zero sum are replaced by a
    /// tiny value, so the radius stays finite or saturates to infinity.
    pub fn radius(&self, theta: f64) -> f64 {
        let q = self.m * theta / 4.0;
        let c = (q.cos() / nonzero(self.a)).abs().powf(self.n2);
        let s = (q.sin() / nonzero(self.b)).abs().powf(self.n3);
        let denom = nonzero(c + s).powf(1.0 / nonzero(self.n1));
        self.scale / denom
    }
}

impl ParametricCurve for SuperformulaParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, laps_span(self.turns))
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        Point2::from_polar(self.radius(t), t)
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.6)
    }
}

impl CurveFamily for SuperformulaParams {
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
    fn test_unit_exponents_give_circle() {
        let params = SuperformulaParams {
            m: 0.0,
            n1: 1.0,
            n2: 1.0,
            n3: 1.0,
            scale: 80.0,
            ..SuperformulaParams::default()
        };
        // m = 0: cos term is 1, sin term is 0.
        assert_relative_eq!(params.radius(1.234), 80.0);
    }

    #[test]
    fn test_zero_guards_stay_finite() {
        let params = SuperformulaParams {
            a: 0.0,
            b: 0.0,
            n1: 0.0,
            ..SuperformulaParams::default()
        };
        let r = params.radius(0.3);
        assert!(r.is_finite());
        assert!(r >= 0.0);
    }

    #[test]
    fn test_default_shape_closes() {
        let sampled = SuperformulaParams::default().sample(&QualityConfig::default());
        assert!(sampled.path.closed);
        assert!(sampled.points().iter().all(|p| p.is_finite()));
    }
}
