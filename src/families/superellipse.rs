//! Lamé curves (superellipses).

use super::{laps_span, CurveFamily, Turns, TINY};
use crate::primitives::Point2;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a superellipse.
///
/// `p = 2` is an ellipse, larger `p` squarer, and `0 < p < 2` star-like.
/// Only `|p|` is used, floored at `1e-9`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperellipseParams {
    /// Horizontal semi-axis.
    #[serde(rename = "A")]
    pub a: f64,
    /// Vertical semi-axis.
    #[serde(rename = "B")]
    pub b: f64,
    pub p: f64,
    /// Rotation in radians.
    pub rot: f64,
    pub turns: Turns,
}

impl Default for SuperellipseParams {
    fn default() -> Self {
        Self {
            a: 160.0,
            b: 120.0,
            p: 2.5,
            rot: 0.0,
            turns: Turns::Auto,
        }
    }
}

/// `sgn(v) · |v|^e`, with zero treated as positive.
#[inline]
fn signed_pow(v: f64, e: f64) -> f64 {
    let s = if v < 0.0 { -1.0 } else { 1.0 };
    s * v.abs().powf(e)
}

impl ParametricCurve for SuperellipseParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, laps_span(self.turns))
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        let e = 2.0 / self.p.abs().max(TINY);
        let local = Point2::new(self.a * signed_pow(t.cos(), e), self.b * signed_pow(t.sin(), e));
        let (sin, cos) = self.rot.sin_cos();
        local.rotate(cos, sin)
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.5)
    }
}

impl CurveFamily for SuperellipseParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        Some(TAU)
    }
}
