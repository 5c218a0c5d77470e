//! Uniform Catmull-Rom splines.
//!
//! Catmull-Rom splines are C1-continuous interpolating splines that pass through
//! all control points. The tangent at each point is computed from its
//! neighbours. At the two ends the missing neighbour is the endpoint itself
//! (clamped), so the spline starts and ends exactly on the first and last
//! control points with a flattened tangent.
//!
//! # Example
//!
//! ```
//! use guilloche::{Point2, curves::CatmullRom2};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 0.5),
//!     Point2::new(3.0, 1.0),
//! ];
//!
//! let spline = CatmullRom2::new(points).unwrap();
//! let smooth = spline.to_polyline(4, usize::MAX);
//! assert_eq!(smooth.len(), 1 + 3 * 4);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// A uniform Catmull-Rom spline in 2D.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom2<F> {
    /// Control points that the spline passes through
    pub points: Vec<Point2<F>>,
}

impl<F: Float> CatmullRom2<F> {
    /// Creates a new spline.
    ///
    /// Returns `None` if fewer than 2 points are provided.
    pub fn new(points: Vec<Point2<F>>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { points })
    }

    /// Returns the number of spline segments.
    pub fn num_segments(&self) -> usize {
        self.points.len() - 1
    }

    /// Evaluates the spline at parameter `t`.
    ///
    /// Parameter `t` ranges from 0 to `num_segments()`; integer values of `t`
    /// land on control points. Values outside the range are clamped.
    pub fn eval(&self, t: F) -> Point2<F> {
        let segments = self.num_segments();
        let t_max = F::from(segments).unwrap_or_else(F::zero);
        let t = t.max(F::zero()).min(t_max);

        let segment = t.floor().to_usize().unwrap_or(0).min(segments - 1);
        let local_t = t - F::from(segment).unwrap_or_else(F::zero);
        self.eval_segment(segment, local_t)
    }

    /// Evaluates segment `i` (between control points `i` and `i + 1`) at
    /// local parameter `t` in `[0, 1]`.
    fn eval_segment(&self, i: usize, t: F) -> Point2<F> {
        let last = self.points.len() - 1;
        let p0 = self.points[i.saturating_sub(1)];
        let p1 = self.points[i];
        let p2 = self.points[(i + 1).min(last)];
        let p3 = self.points[(i + 2).min(last)];

        let t2 = t * t;
        let t3 = t2 * t;

        let one = F::one();
        let two = one + one;
        let three = two + one;
        let four = two + two;
        let five = four + one;
        let half = one / two;

        // Catmull-Rom basis matrix coefficients
        let x = half
            * ((two * p1.x)
                + (-p0.x + p2.x) * t
                + (two * p0.x - five * p1.x + four * p2.x - p3.x) * t2
                + (-p0.x + three * p1.x - three * p2.x + p3.x) * t3);

        let y = half
            * ((two * p1.y)
                + (-p0.y + p2.y) * t
                + (two * p0.y - five * p1.y + four * p2.y - p3.y) * t2
                + (-p0.y + three * p1.y - three * p2.y + p3.y) * t3);

        Point2::new(x, y)
    }

    /// Converts the spline to a polyline with a fixed number of samples per
    /// segment.
    ///
    /// The first control point is emitted, then `subdiv` points for each
    /// segment at local parameters `1/subdiv, 2/subdiv, ..., 1`, so every
    /// control point is reproduced exactly. `subdiv` below 1 is treated as 1.
    /// Output stops as soon as it holds `max_points` points.
    pub fn to_polyline(&self, subdiv: usize, max_points: usize) -> Vec<Point2<F>> {
        let subdiv = subdiv.max(1);
        let mut out = Vec::with_capacity((1 + self.num_segments() * subdiv).min(max_points));
        if max_points == 0 {
            return out;
        }
        out.push(self.points[0]);

        let step = F::one() / F::from(subdiv).unwrap_or_else(F::one);
        for i in 0..self.num_segments() {
            for j in 1..=subdiv {
                if out.len() >= max_points {
                    return out;
                }
                let t = if j == subdiv {
                    F::one()
                } else {
                    F::from(j).unwrap_or_else(F::zero) * step
                };
                out.push(self.eval_segment(i, t));
            }
        }
        out
    }
}
