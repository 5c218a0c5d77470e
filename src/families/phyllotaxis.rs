//! Vogel's phyllotaxis spiral: seed `n` at radius `c√n` and angle `n·α`.

use super::{Center, CurveFamily};
use crate::curves::CatmullRom2;
use crate::primitives::Point2;
use crate::sampling::{
    ClosureRule, FixedCountCurve, QualityConfig, SampledCurve, SamplingMode, StatsExtras,
};
use serde::{Deserialize, Serialize};

/// Minimum seed count for spline smoothing.
const MIN_SPLINE_SEEDS: usize = 4;

/// How consecutive seeds are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connect {
    #[default]
    Polyline,
    /// Uniform Catmull-Rom through the seeds.
    Spline,
}

/// Parameters of a phyllotaxis spiral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhyllotaxisParams {
    /// Spacing constant.
    pub c: f64,
    /// Number of seeds.
    pub n_points: usize,
    /// Divergence angle in degrees. 137.5° is the golden angle.
    pub alpha_deg: f64,
    pub connect: Connect,
    /// Spline points per seed interval.
    pub spline_subdiv: usize,
    pub center: Center,
}

impl Default for PhyllotaxisParams {
    fn default() -> Self {
        Self {
            c: 6.0,
            n_points: 1200,
            alpha_deg: 137.5,
            connect: Connect::Polyline,
            spline_subdiv: 6,
            center: Center::default(),
        }
    }
}

impl PhyllotaxisParams {
    /// Seed positions, at most `max_points` of them.
    pub fn seeds(&self, max_points: usize) -> Vec<Point2<f64>> {
        let alpha = self.alpha_deg.to_radians();
        (0..self.n_points.min(max_points))
            .map(|n| {
                let n = n as f64;
                let p = Point2::from_polar(self.c * n.sqrt(), n * alpha);
                Point2::new(self.center.x + p.x, self.center.y + p.y)
            })
            .collect()
    }
}

impl FixedCountCurve for PhyllotaxisParams {
    fn points(&self, max_points: usize) -> Vec<Point2<f64>> {
        let seeds = self.seeds(max_points);
        match self.connect {
            Connect::Spline if seeds.len() >= MIN_SPLINE_SEEDS => CatmullRom2::new(seeds)
                .map(|spline| spline.to_polyline(self.spline_subdiv, max_points))
                .unwrap_or_default(),
            _ => seeds,
        }
    }

    fn closure(&self, _points: &[Point2<f64>]) -> ClosureRule {
        ClosureRule::Open
    }
}

impl CurveFamily for PhyllotaxisParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::FixedCount(self)
    }

    fn sample(&self, quality: &QualityConfig) -> SampledCurve {
        let seeds = self.n_points.min(quality.sanitized().max_verts);
        self.mode()
            .run(quality)
            .with_extras(StatsExtras::Phyllotaxis { seeds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polyline_has_one_vertex_per_seed() {
        let sampled = PhyllotaxisParams::default().sample(&QualityConfig::default());
        assert_eq!(sampled.stats.vertices, 1200);
        assert_eq!(sampled.stats.extras, StatsExtras::Phyllotaxis { seeds: 1200 });
        assert!(!sampled.path.closed);
    }

    #[test]
    fn test_seed_geometry() {
        let params = PhyllotaxisParams {
            center: Center { x: 3.0, y: 4.0 },
            ..PhyllotaxisParams::default()
        };
        let seeds = params.seeds(10);
        assert_eq!(seeds.len(), 10);
        assert_eq!(seeds[0], Point2::new(3.0, 4.0));
        assert_relative_eq!(seeds[4].distance(Point2::new(3.0, 4.0)), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spline_passes_through_seeds() {
        let params = PhyllotaxisParams {
            n_points: 300,
            connect: Connect::Spline,
            spline_subdiv: 6,
            ..PhyllotaxisParams::default()
        };
        let seeds = params.seeds(usize::MAX);
        let pts = params.points(usize::MAX);
        assert_eq!(pts.len(), 1 + 299 * 6);
        for (i, seed) in seeds.iter().enumerate() {
            assert_relative_eq!(pts[i * 6].x, seed.x, epsilon = 1e-9);
            assert_relative_eq!(pts[i * 6].y, seed.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_spline_needs_four_seeds() {
        let params = PhyllotaxisParams {
            n_points: 3,
            connect: Connect::Spline,
            ..PhyllotaxisParams::default()
        };
        assert_eq!(params.points(usize::MAX).len(), 3);
    }

    #[test]
    fn test_spline_respects_cap() {
        let params = PhyllotaxisParams {
            n_points: 300,
            connect: Connect::Spline,
            ..PhyllotaxisParams::default()
        };
        let sampled = params.sample(&QualityConfig::new(0.35, 2.0, 100));
        assert_eq!(sampled.stats.vertices, 100);
        assert_eq!(sampled.stats.extras, StatsExtras::Phyllotaxis { seeds: 100 });
    }

    #[test]
    fn test_zero_points() {
        let params = PhyllotaxisParams {
            n_points: 0,
            ..PhyllotaxisParams::default()
        };
        let sampled = params.sample(&QualityConfig::default());
        assert_eq!(sampled.stats.vertices, 0);
        assert!(sampled.bbox.is_none());
    }

    #[test]
    fn test_json_names() {
        let params: PhyllotaxisParams = serde_json::from_str(
            r#"{ "nPoints": 50, "alphaDeg": 137.508, "connect": "spline", "splineSubdiv": 3 }"#,
        )
        .unwrap();
        assert_eq!(params.n_points, 50);
        assert_eq!(params.connect, Connect::Spline);
        assert_eq!(params.spline_subdiv, 3);
        assert_eq!(params.c, 6.0);
    }
}
