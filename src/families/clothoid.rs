//! Euler spirals (clothoids), integrated from the Fresnel derivatives.
//!
//! The curve has no closed form, so it is produced by the integrated flavour
//! of the adaptive sampler. Curvature grows linearly with `|u|`, and the step
//! heuristic shrinks the parameter step accordingly.

use super::{Center, CurveFamily};
use crate::primitives::{Point2, Vec2};
use crate::sampling::{AdaptiveCurve, Domain, IntegratedCurve, QualityConfig, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Largest trial step near the inflection point.
const MAX_STEP_NEAR_ORIGIN: f64 = 0.06;

/// Half-width of the inflection region where the step is capped.
const ORIGIN_REGION: f64 = 0.2;

const STEP_FLOOR: f64 = 1e-6;

/// Parameters of a clothoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothoidParams {
    /// Start of the Fresnel parameter range.
    pub t0: f64,
    /// End of the Fresnel parameter range.
    pub t1: f64,
    /// Sample `[-|t1|, |t1|]` instead of `[t0, t1]`.
    pub symmetric: bool,
    /// Pixels per unit of arc length.
    pub scale: f64,
    /// Rotation in radians.
    pub rotate: f64,
    /// Handedness. Only the sign is read: negative values mirror the spiral
    /// across its start tangent, and the magnitude never rescales the phase.
    pub dir: f64,
    pub center: Center,
}

impl Default for ClothoidParams {
    fn default() -> Self {
        Self {
            t0: 0.0,
            t1: 3.5,
            symmetric: true,
            scale: 180.0,
            rotate: 0.0,
            dir: 1.0,
            center: Center::default(),
        }
    }
}

impl ClothoidParams {
    fn handedness(&self) -> f64 {
        if self.dir < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

impl IntegratedCurve for ClothoidParams {
    fn domain(&self) -> Domain {
        if self.symmetric {
            let half = self.t1.abs();
            Domain::new(-half, half)
        } else {
            Domain::new(self.t0.min(self.t1), self.t0.max(self.t1))
        }
    }

    /// `scale · (cos(πu²/2), ±sin(πu²/2))`, the derivatives of the Fresnel
    /// integrals `C(u)` and `S(u)`.
    fn velocity(&self, u: f64) -> Vec2<f64> {
        let (sin, cos) = (FRAC_PI_2 * u * u).sin_cos();
        Vec2::new(cos, self.handedness() * sin) * self.scale
    }

    fn place(&self, local: Point2<f64>) -> Point2<f64> {
        let (sin, cos) = self.rotate.sin_cos();
        let p = local.rotate(cos, sin);
        Point2::new(self.center.x + p.x, self.center.y + p.y)
    }

    /// `max_angle / (π|u|)`, capped at 0.06 near the inflection point.
    fn initial_step(&self, u: f64, quality: &QualityConfig) -> f64 {
        let denom = (PI * u.abs().max(STEP_FLOOR)).max(STEP_FLOOR);
        let dt = quality.max_angle_step_rad() / denom;
        if u.abs() < ORIGIN_REGION {
            dt.min(MAX_STEP_NEAR_ORIGIN)
        } else {
            dt
        }
    }
}

impl CurveFamily for ClothoidParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Integrated(self))
    }
}
