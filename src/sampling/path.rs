//! Polyline accumulation, closure detection and the sampling result types.

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use crate::ratio::Ratio;
use serde::Serialize;

/// How a family decides whether its sampled polyline is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClosureRule {
    /// Closed iff the first and last points are closer than this many pixels.
    Threshold(f64),
    /// Never closed.
    Open,
    /// Always closed.
    Closed,
}

impl ClosureRule {
    /// Applies the rule to a finished polyline.
    pub fn is_closed(self, points: &[Point2<f64>]) -> bool {
        match self {
            ClosureRule::Threshold(px) => match (points.first(), points.last()) {
                (Some(first), Some(last)) => first.distance(*last) < px,
                _ => false,
            },
            ClosureRule::Open => false,
            ClosureRule::Closed => true,
        }
    }
}

/// Sampled geometry: one or more polylines plus the closure flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathData {
    pub polylines: Vec<Vec<Point2<f64>>>,
    pub closed: bool,
}

/// Which rolling-circle construction a cycloidal star uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StarKind {
    /// Circle rolling outside the fixed circle.
    Epi,
    /// Circle rolling inside the fixed circle.
    #[default]
    Hypo,
}

/// Family-specific summary values.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum StatsExtras {
    #[default]
    None,
    /// Derived radii of a cycloidal star.
    CycloidalStar {
        kind: StarKind,
        n: u32,
        /// Fixed circle radius `R`, derived from the cusp count.
        fixed_radius: f64,
        rolling_radius: f64,
        pen_offset: f64,
    },
    /// Rational approximation `p/q` of a trochoid's frequency ratio.
    Trochoid { ratio: Ratio },
    /// Seed count of a phyllotaxis spiral before smoothing.
    Phyllotaxis { seeds: usize },
}

/// Read-only summary of a sampling run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub vertices: usize,
    pub length_px: f64,
    /// Base closure period in parameter units, for periodic families.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,
    pub extras: StatsExtras,
}

/// Result of sampling one curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledCurve {
    #[serde(rename = "pathData")]
    pub path: PathData,
    /// `None` only when no point was emitted.
    pub bbox: Option<Aabb2<f64>>,
    pub stats: Stats,
}

impl SampledCurve {
    /// Records the base closure period.
    pub fn with_period(mut self, period: f64) -> Self {
        self.stats.period = Some(period);
        self
    }

    /// Records family-specific stats.
    pub fn with_extras(mut self, extras: StatsExtras) -> Self {
        self.stats.extras = extras;
        self
    }

    /// Points of the first polyline, or an empty slice.
    pub fn points(&self) -> &[Point2<f64>] {
        self.path.polylines.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Accumulates emitted points into a polyline.
///
/// Keeps the running bounding box and cumulative Euclidean length, each
/// updated in O(1) per point.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    points: Vec<Point2<f64>>,
    bbox: Option<Aabb2<f64>>,
    length: f64,
}

impl PathBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Appends a point, extending the length and the bounding box.
    pub fn push(&mut self, p: Point2<f64>) {
        if let Some(last) = self.points.last() {
            self.length += last.distance(p);
        }
        self.bbox = Some(match self.bbox {
            Some(bbox) => bbox.expand_to_include(p),
            None => Aabb2::from_point(p),
        });
        self.points.push(p);
    }

    /// Number of points emitted so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been emitted.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cumulative length so far.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Finishes the polyline, deciding closure with `rule`.
    pub fn finish(self, rule: ClosureRule) -> SampledCurve {
        let closed = rule.is_closed(&self.points);
        let stats = Stats {
            vertices: self.points.len(),
            length_px: self.length,
            period: None,
            extras: StatsExtras::None,
        };
        SampledCurve {
            path: PathData {
                polylines: vec![self.points],
                closed,
            },
            bbox: self.bbox,
            stats,
        }
    }
}

impl Extend<Point2<f64>> for PathBuilder {
    fn extend<I: IntoIterator<Item = Point2<f64>>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}
