//! Sampling for families defined by a fixed number of points.

use super::path::{ClosureRule, PathBuilder, SampledCurve};
use super::quality::QualityConfig;
use crate::primitives::Point2;

/// A curve whose vertices are fixed by its parameters rather than chosen by
/// error control.
pub trait FixedCountCurve {
    /// Produces at most `max_points` vertices.
    fn points(&self, max_points: usize) -> Vec<Point2<f64>>;

    /// How closure is decided from the produced points.
    fn closure(&self, points: &[Point2<f64>]) -> ClosureRule;
}

/// Driver that applies the vertex cap and accumulates stats.
#[derive(Debug, Clone, Copy)]
pub struct FixedCountSampler {
    quality: QualityConfig,
}

impl FixedCountSampler {
    /// Creates a sampler with a sanitized copy of `quality`.
    pub fn new(quality: &QualityConfig) -> Self {
        Self {
            quality: quality.sanitized(),
        }
    }

    /// Samples `curve`, truncating to `max_verts` points.
    pub fn sample<C: FixedCountCurve + ?Sized>(&self, curve: &C) -> SampledCurve {
        let max_verts = self.quality.max_verts;
        let mut points = curve.points(max_verts);
        if points.len() > max_verts {
            log::debug!("fixed-count curve truncated from {} to {} points", points.len(), max_verts);
            points.truncate(max_verts);
        }
        let rule = curve.closure(&points);
        let mut path = PathBuilder::with_capacity(points.len());
        path.extend(points);
        path.finish(rule)
    }
}
