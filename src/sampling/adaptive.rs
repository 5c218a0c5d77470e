//! Error-bounded adaptive stepping over a curve's parameter domain.
//!
//! The sampler walks `[start, end)` and chooses each step so that the chord
//! stays below `max_seg_len_px` and the curve turns by at most
//! `1.5 × max_angle_step` within the step. The turn is measured between the
//! chords to and from the step's midpoint. Refinement is a bounded number of
//! halvings; when the budget runs out the step is accepted anyway, so bad
//! parameters coarsen the output instead of stalling it.
//!
//! Two flavours share that contract:
//!
//! - [`AdaptiveSampler::sample`] evaluates a closed-form point function.
//! - [`AdaptiveSampler::integrate`] accumulates a velocity field with midpoint
//!   integration, for curves that are only defined by an integral.
//!
//! # Example
//!
//! ```
//! use guilloche::sampling::{AdaptiveSampler, ClosureRule, Domain, ParametricCurve};
//! use guilloche::{Point2, QualityConfig};
//! use std::f64::consts::TAU;
//!
//! struct Circle(f64);
//!
//! impl ParametricCurve for Circle {
//!     fn domain(&self) -> Domain {
//!         Domain::new(0.0, TAU)
//!     }
//!     fn eval(&self, t: f64) -> Point2<f64> {
//!         Point2::from_polar(self.0, t)
//!     }
//!     fn closure(&self) -> ClosureRule {
//!         ClosureRule::Threshold(0.5)
//!     }
//! }
//!
//! let sampled = AdaptiveSampler::new(&QualityConfig::default()).sample(&Circle(100.0));
//! assert!(sampled.path.closed);
//! assert!(sampled.stats.vertices > 300);
//! ```

use super::path::{ClosureRule, PathBuilder, SampledCurve};
use super::quality::QualityConfig;
use crate::primitives::{Point2, Vec2};

/// Forced advance, in domain units, when no usable step exists.
pub const MIN_ADVANCE: f64 = 1e-6;

/// Steps at or below this size end integration.
const MIN_INTEGRATION_STEP: f64 = 1e-12;

/// Turn budget as a multiple of the nominal angular step.
const TURN_TOLERANCE: f64 = 1.5;

/// Added to the chord-length product in the turn-angle cosine.
const TURN_BIAS: f64 = 1e-9;

/// Absolute ceiling on integration loop iterations.
const MAX_INTEGRATION_ITERATIONS: usize = 5_000_000;

/// A parameter interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    /// Creates a domain.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the domain. Negative or NaN spans sample a single point.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// A curve given by a closed-form point function of one parameter.
pub trait ParametricCurve {
    /// Parameter interval to sample.
    fn domain(&self) -> Domain;

    /// Point at parameter `t`.
    fn eval(&self, t: f64) -> Point2<f64>;

    /// Trial step at `t` before refinement. Defaults to the angular step.
    fn initial_step(&self, _t: f64, quality: &QualityConfig) -> f64 {
        quality.max_angle_step_rad()
    }

    /// How closure is decided once sampling ends.
    fn closure(&self) -> ClosureRule;
}

/// A curve given by its velocity, integrated from a local origin.
///
/// Positions are accumulated in a local frame starting at `(0, 0)` and
/// mapped to output space by [`place`](Self::place). `place` must preserve
/// lengths, so the segment bound checked in the local frame still holds on
/// output.
pub trait IntegratedCurve {
    /// Parameter interval to integrate over.
    fn domain(&self) -> Domain;

    /// Derivative of the local position at `u`, in pixels per unit of `u`.
    fn velocity(&self, u: f64) -> Vec2<f64>;

    /// Maps a local-frame position to output space.
    fn place(&self, local: Point2<f64>) -> Point2<f64>;

    /// Trial step at `u` before refinement.
    fn initial_step(&self, u: f64, quality: &QualityConfig) -> f64;

    /// How closure is decided once sampling ends.
    fn closure(&self) -> ClosureRule {
        ClosureRule::Open
    }
}

/// Adaptive discretization driver.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveSampler {
    quality: QualityConfig,
}

impl AdaptiveSampler {
    /// Halving attempts per step for evaluated curves.
    pub const MAX_REFINEMENTS: usize = 2;

    /// Halving attempts per step for integrated curves.
    pub const MAX_INTEGRATION_REFINEMENTS: usize = 30;

    /// Creates a sampler with a sanitized copy of `quality`.
    pub fn new(quality: &QualityConfig) -> Self {
        Self {
            quality: quality.sanitized(),
        }
    }

    /// Samples a closed-form curve.
    ///
    /// The seed point `eval(start)` is always emitted, so the result holds at
    /// least one point. The last step is clamped to land exactly on `end`.
    pub fn sample<C: ParametricCurve + ?Sized>(&self, curve: &C) -> SampledCurve {
        let Domain { start, end } = curve.domain();
        let max_angle = self.quality.max_angle_step_rad();
        let max_seg = self.quality.max_seg_len_px;
        let max_verts = self.quality.max_verts;

        let mut path = PathBuilder::new();
        let mut t = start;
        let mut p0 = curve.eval(t);
        path.push(p0);

        while t < end && path.len() < max_verts {
            let mut dt = curve.initial_step(t, &self.quality);
            if !(dt.is_finite() && dt > 0.0) {
                dt = MIN_ADVANCE;
            }

            for _ in 0..Self::MAX_REFINEMENTS {
                let p1 = curve.eval(t + dt);
                if p0.distance(p1) > max_seg {
                    dt *= 0.5;
                    continue;
                }
                let mid = curve.eval(t + dt * 0.5);
                let turn = (mid - p0).turn_angle(p1 - mid, TURN_BIAS);
                if turn > max_angle * TURN_TOLERANCE {
                    dt *= 0.5;
                    continue;
                }
                break;
            }

            let next = (t + dt).min(end);
            t = if next > t { next } else { (t + MIN_ADVANCE).min(end) };
            let p1 = curve.eval(t);
            path.push(p1);
            p0 = p1;
        }

        if t < end {
            log::debug!(
                "vertex cap {} reached at t = {:.6} of [{:.6}, {:.6})",
                max_verts,
                t,
                start,
                end
            );
        }
        path.finish(curve.closure())
    }

    /// Samples a curve defined by integrating its velocity.
    ///
    /// Each step integrates with the midpoint rule and is halved until the
    /// emitted segment is at most `max_seg_len_px`, up to
    /// [`MAX_INTEGRATION_REFINEMENTS`](Self::MAX_INTEGRATION_REFINEMENTS)
    /// times. A step that never fits advances the parameter by
    /// [`MIN_ADVANCE`] without emitting a point. The loop is capped at
    /// `min(4 × max_verts, 5 000 000)` iterations.
    pub fn integrate<C: IntegratedCurve + ?Sized>(&self, curve: &C) -> SampledCurve {
        let Domain { start, end } = curve.domain();
        let max_seg = self.quality.max_seg_len_px;
        let max_verts = self.quality.max_verts;
        let max_iterations = max_verts.saturating_mul(4).min(MAX_INTEGRATION_ITERATIONS);

        let mut path = PathBuilder::new();
        let mut u = start;
        let mut local = Point2::origin();
        path.push(curve.place(local));

        let mut iterations = 0;
        while u < end && path.len() < max_verts {
            iterations += 1;
            if iterations > max_iterations {
                log::debug!(
                    "integration stopped after {} iterations at u = {:.6} of {:.6}",
                    max_iterations,
                    u,
                    end
                );
                break;
            }

            let mut dt = curve.initial_step(u, &self.quality);
            if !dt.is_finite() {
                dt = MIN_ADVANCE;
            }
            if u + dt > end {
                dt = end - u;
            }
            if dt <= MIN_INTEGRATION_STEP {
                break;
            }

            let mut accepted = false;
            for _ in 0..Self::MAX_INTEGRATION_REFINEMENTS {
                let delta = curve.velocity(u + 0.5 * dt) * dt;
                if delta.magnitude() > max_seg {
                    dt *= 0.5;
                    if dt <= MIN_INTEGRATION_STEP {
                        break;
                    }
                    continue;
                }
                local = local + delta;
                u += dt;
                path.push(curve.place(local));
                accepted = true;
                break;
            }

            if !accepted {
                let nudge = (end - u).min(MIN_ADVANCE);
                if nudge <= 0.0 {
                    break;
                }
                log::trace!("no acceptable step at u = {:.6}, nudging by {:e}", u, nudge);
                u += nudge;
            }
        }

        if path.len() >= max_verts && u < end {
            log::debug!("vertex cap {} reached at u = {:.6} of {:.6}", max_verts, u, end);
        }
        path.finish(curve.closure())
    }
}
