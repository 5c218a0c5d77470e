//! Spirograph curves traced by a pen on a circle rolling around a fixed one.

use super::{nonzero, CurveFamily, Turns};
use crate::primitives::Point2;
use crate::ratio::{rationalize, Ratio};
use crate::sampling::{
    AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode, StatsExtras,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

const RATIO_TOLERANCE: f64 = 1e-9;
const RATIO_MAX_DENOMINATOR: u64 = 20_000;

/// Which side of the fixed circle the rolling circle runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrochoidKind {
    /// Rolling inside.
    #[default]
    Hypotrochoid,
    /// Rolling outside.
    Epitrochoid,
}

/// Parameters of an epi- or hypotrochoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrochoidParams {
    pub kind: TrochoidKind,
    /// Fixed circle radius.
    #[serde(rename = "R")]
    pub fixed_radius: f64,
    /// Rolling circle radius.
    pub r: f64,
    /// Pen distance from the rolling circle's center.
    pub d: f64,
    pub turns: Turns,
}

impl Default for TrochoidParams {
    fn default() -> Self {
        Self {
            kind: TrochoidKind::Hypotrochoid,
            fixed_radius: 140.0,
            r: 37.0,
            d: 18.0,
            turns: Turns::Auto,
        }
    }
}

impl TrochoidParams {
    /// Distance between the two circle centers, `R ± r`.
    fn center_distance(&self) -> f64 {
        match self.kind {
            TrochoidKind::Hypotrochoid => self.fixed_radius - self.r,
            TrochoidKind::Epitrochoid => self.fixed_radius + self.r,
        }
    }

    /// Frequency of the pen term relative to the carrier, `K = (R ± r) / r`.
    pub fn frequency_ratio(&self) -> f64 {
        self.center_distance() / nonzero(self.r)
    }

    /// Rational approximation `p/q` of [`frequency_ratio`](Self::frequency_ratio).
    pub fn ratio(&self) -> Ratio {
        rationalize(self.frequency_ratio(), RATIO_TOLERANCE, RATIO_MAX_DENOMINATOR)
    }

    /// Closure period `2π q`.
    pub fn base_period(&self) -> f64 {
        TAU * self.ratio().q.max(1) as f64
    }
}

impl ParametricCurve for TrochoidParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, self.base_period() * self.turns.multiplier())
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        let s = self.center_distance();
        let kt = self.frequency_ratio() * t;
        match self.kind {
            TrochoidKind::Hypotrochoid => Point2::new(
                s * t.cos() + self.d * kt.cos(),
                s * t.sin() - self.d * kt.sin(),
            ),
            TrochoidKind::Epitrochoid => Point2::new(
                s * t.cos() - self.d * kt.cos(),
                s * t.sin() - self.d * kt.sin(),
            ),
        }
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.5)
    }
}

impl CurveFamily for TrochoidParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        Some(self.base_period())
    }

    fn extras(&self) -> StatsExtras {
        StatsExtras::Trochoid { ratio: self.ratio() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::QualityConfig;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_default_ratio_and_period() {
        let p = TrochoidParams::default();
        assert_eq!(p.ratio(), Ratio { p: 103, q: 37 });
        assert_relative_eq!(p.base_period(), 74.0 * PI);
    }

    #[test]
    fn test_epitrochoid_ratio() {
        let p = TrochoidParams {
            kind: TrochoidKind::Epitrochoid,
            fixed_radius: 100.0,
            r: 40.0,
            ..TrochoidParams::default()
        };
        assert_eq!(p.ratio(), Ratio { p: 7, q: 2 });
        assert_relative_eq!(p.base_period(), 4.0 * PI);
    }

    #[test]
    fn test_start_point() {
        let hypo = TrochoidParams::default();
        let p = hypo.eval(0.0);
        assert_relative_eq!(p.x, 103.0 + 18.0);
        assert_relative_eq!(p.y, 0.0);

        let epi = TrochoidParams {
            kind: TrochoidKind::Epitrochoid,
            ..TrochoidParams::default()
        };
        assert_relative_eq!(epi.eval(0.0).x, 177.0 - 18.0);
    }

    #[test]
    fn test_zero_rolling_radius_is_finite() {
        let p = TrochoidParams {
            r: 0.0,
            ..TrochoidParams::default()
        };
        let sampled = p.sample(&QualityConfig::new(0.35, 2.0, 2_000));
        assert!(sampled.points().iter().all(|pt| pt.is_finite()));
    }

    #[test]
    fn test_closes_and_reports_ratio() {
        let sampled = TrochoidParams::default().sample(&QualityConfig::default());
        assert!(sampled.path.closed);
        assert_eq!(
            sampled.stats.extras,
            StatsExtras::Trochoid {
                ratio: Ratio { p: 103, q: 37 }
            }
        );
    }

    #[test]
    fn test_kind_names() {
        let p: TrochoidParams = serde_json::from_str(r#"{ "kind": "epitrochoid", "R": 90 }"#).unwrap();
        assert_eq!(p.kind, TrochoidKind::Epitrochoid);
        assert_eq!(p.fixed_radius, 90.0);
    }
}
