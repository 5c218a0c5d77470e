//! Discretization of parametric curves into polylines.
//!
//! Every curve family is reduced to one of three sampling strategies:
//!
//! - evaluated adaptive stepping, for curves with a closed-form point
//!   function,
//! - integrated adaptive stepping, for curves defined by their velocity,
//! - a fixed point count, for families that emit a prescribed set of points.
//!
//! [`SamplingMode`] tags a curve with its strategy so callers can dispatch
//! without knowing the family.

mod adaptive;
mod fixed;
mod path;
mod quality;

pub use adaptive::{AdaptiveSampler, Domain, IntegratedCurve, ParametricCurve, MIN_ADVANCE};
pub use fixed::{FixedCountCurve, FixedCountSampler};
pub use path::{ClosureRule, PathBuilder, PathData, SampledCurve, StarKind, Stats, StatsExtras};
pub use quality::QualityConfig;

/// An adaptively sampled curve, by flavour.
#[derive(Clone, Copy)]
pub enum AdaptiveCurve<'a> {
    /// Closed-form point function.
    Evaluated(&'a dyn ParametricCurve),
    /// Velocity field integrated from a local origin.
    Integrated(&'a dyn IntegratedCurve),
}

/// How a curve is turned into vertices.
#[derive(Clone, Copy)]
pub enum SamplingMode<'a> {
    /// Steps chosen by chord-length and turn-angle error control.
    Adaptive(AdaptiveCurve<'a>),
    /// Points fixed by the curve's own parameters.
    FixedCount(&'a dyn FixedCountCurve),
}

impl SamplingMode<'_> {
    /// Samples the curve under `quality`.
    pub fn run(self, quality: &QualityConfig) -> SampledCurve {
        match self {
            SamplingMode::Adaptive(AdaptiveCurve::Evaluated(curve)) => {
                AdaptiveSampler::new(quality).sample(curve)
            }
            SamplingMode::Adaptive(AdaptiveCurve::Integrated(curve)) => {
                AdaptiveSampler::new(quality).integrate(curve)
            }
            SamplingMode::FixedCount(curve) => FixedCountSampler::new(quality).sample(curve),
        }
    }
}

impl std::fmt::Debug for SamplingMode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SamplingMode::Adaptive(AdaptiveCurve::Evaluated(_)) => "Adaptive(Evaluated)",
            SamplingMode::Adaptive(AdaptiveCurve::Integrated(_)) => "Adaptive(Integrated)",
            SamplingMode::FixedCount(_) => "FixedCount",
        };
        f.write_str(name)
    }
}
