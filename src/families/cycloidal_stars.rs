//! Trochoids with the fixed radius chosen to give an exact cusp count.

use super::{nonzero, CurveFamily, Turns};
use crate::primitives::Point2;
use crate::ratio::gcd_rounded;
use crate::sampling::{
    AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode, StarKind, StatsExtras,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a cycloidal star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycloidalStarsParams {
    pub kind: StarKind,
    /// Number of cusps.
    pub n: u32,
    /// Rolling circle radius.
    pub r: f64,
    /// Pen distance from the rolling circle's center. `d = r` draws the
    /// classic cycloid with sharp cusps.
    pub d: f64,
    pub turns: Turns,
}

impl Default for CycloidalStarsParams {
    fn default() -> Self {
        Self {
            kind: StarKind::Hypo,
            n: 7,
            r: 24.0,
            d: 24.0,
            turns: Turns::Auto,
        }
    }
}

impl CycloidalStarsParams {
    /// Fixed radius `R`: `r·(n − 1)` for epi, `r·(n + 1)` for hypo, with the
    /// factor at least 1.
    pub fn fixed_radius(&self) -> f64 {
        let n = f64::from(self.n);
        let factor = match self.kind {
            StarKind::Epi => n - 1.0,
            StarKind::Hypo => n + 1.0,
        };
        self.r * factor.max(1.0)
    }

    fn center_distance(&self) -> f64 {
        match self.kind {
            StarKind::Epi => self.fixed_radius() + self.r,
            StarKind::Hypo => self.fixed_radius() - self.r,
        }
    }

    /// Closure period `2π · r / gcd(r, R ± r)`.
    pub fn base_period(&self) -> f64 {
        TAU * self.r / gcd_rounded(self.r, self.center_distance())
    }
}

impl ParametricCurve for CycloidalStarsParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, self.base_period() * self.turns.multiplier())
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        let s = self.center_distance();
        let kt = s / nonzero(self.r) * t;
        match self.kind {
            StarKind::Epi => Point2::new(
                s * t.cos() - self.d * kt.cos(),
                s * t.sin() - self.d * kt.sin(),
            ),
            StarKind::Hypo => Point2::new(
                s * t.cos() + self.d * kt.cos(),
                s * t.sin() - self.d * kt.sin(),
            ),
        }
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.7)
    }
}

impl CurveFamily for CycloidalStarsParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        Some(self.base_period())
    }

    fn extras(&self) -> StatsExtras {
        StatsExtras::CycloidalStar {
            kind: self.kind,
            n: self.n,
            fixed_radius: self.fixed_radius(),
            rolling_radius: self.r,
            pen_offset: self.d,
        }
    }
}
