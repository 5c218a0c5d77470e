//! Rose curves, `r = A cos(kθ + φ)`.

use super::{CurveFamily, Turns, Wave};
use crate::primitives::Point2;
use crate::ratio::rationalize;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

const RATIO_TOLERANCE: f64 = 1e-9;
const RATIO_MAX_DENOMINATOR: u64 = 10_000;

/// Parameters of a rhodonea (rose) curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhodoneaParams {
    /// Petal length.
    #[serde(rename = "A")]
    pub amplitude: f64,
    /// Angular frequency. Integers give `k` or `2k` petals.
    pub k: f64,
    /// Phase in radians.
    pub phi: f64,
    /// `sin` adds `π/2` to the phase.
    pub variant: Wave,
    pub turns: Turns,
}

impl Default for RhodoneaParams {
    fn default() -> Self {
        Self {
            amplitude: 140.0,
            k: 5.0,
            phi: 0.0,
            variant: Wave::Cos,
            turns: Turns::Auto,
        }
    }
}

/// Polar rose point shared by the rose-based families.
#[inline]
pub(crate) fn rose_point(amplitude: f64, k: f64, phase: f64, theta: f64) -> Point2<f64> {
    Point2::from_polar(amplitude * (k * theta + phase).cos(), theta)
}

impl RhodoneaParams {
    /// Closure period: `π` for even integer `k`, `2π` for odd integer `k`,
    /// and `2π q` for `k ≈ p/q` otherwise.
    pub fn base_period(&self) -> f64 {
        let k = self.k;
        if !k.is_finite() {
            return TAU;
        }
        if k.fract() == 0.0 {
            if k.abs() % 2.0 == 0.0 {
                PI
            } else {
                TAU
            }
        } else {
            let q = rationalize(k, RATIO_TOLERANCE, RATIO_MAX_DENOMINATOR).q.max(1);
            TAU * q as f64
        }
    }

    fn phase(&self) -> f64 {
        self.phi + self.variant.phase_shift()
    }
}

impl ParametricCurve for RhodoneaParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, self.base_period() * self.turns.multiplier())
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        rose_point(self.amplitude, self.k, self.phase(), t)
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.5)
    }
}

impl CurveFamily for RhodoneaParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        Some(self.base_period())
    }
}
