//! Maurer roses: chords between rose points taken at a fixed angular stride.

use super::rhodonea::rose_point;
use super::{CurveFamily, Wave};
use crate::primitives::Point2;
use crate::sampling::{ClosureRule, FixedCountCurve, SamplingMode};
use serde::{Deserialize, Serialize};

/// Parameters of a Maurer rose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaurerRoseParams {
    #[serde(rename = "A")]
    pub amplitude: f64,
    pub k: f64,
    pub phi: f64,
    pub variant: Wave,
    /// Angular stride between consecutive points, in degrees.
    #[serde(rename = "dDeg")]
    pub d_deg: f64,
    /// Number of rose points.
    pub count: usize,
    /// Appends the first point again to close the loop.
    pub close: bool,
}

impl Default for MaurerRoseParams {
    fn default() -> Self {
        Self {
            amplitude: 140.0,
            k: 6.0,
            phi: 0.0,
            variant: Wave::Sin,
            d_deg: 71.0,
            count: 360,
            close: false,
        }
    }
}

impl FixedCountCurve for MaurerRoseParams {
    /// Emits `θ_i = i · dDeg` for `i < count`. With `close`, one slot of the
    /// budget is kept for the repeated first point.
    fn points(&self, max_points: usize) -> Vec<Point2<f64>> {
        let limit = if self.close && max_points > 1 {
            max_points - 1
        } else {
            max_points
        };
        let stride = self.d_deg.to_radians();
        let phase = self.phi + self.variant.phase_shift();

        let mut points: Vec<_> = (0..self.count.min(limit))
            .map(|i| rose_point(self.amplitude, self.k, phase, i as f64 * stride))
            .collect();
        if self.close && points.len() > 1 && points.len() < max_points {
            points.push(points[0]);
        }
        points
    }

    fn closure(&self, points: &[Point2<f64>]) -> ClosureRule {
        if self.close && points.len() > 1 {
            ClosureRule::Closed
        } else {
            ClosureRule::Open
        }
    }
}

impl CurveFamily for MaurerRoseParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::FixedCount(self)
    }
}
