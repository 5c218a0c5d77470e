//! The curve families.
//!
//! Each family is a plain parameter struct. Every field has a default, so a
//! partially specified JSON object deserializes into a complete record. A
//! family implements one of the sampling traits ([`ParametricCurve`],
//! [`IntegratedCurve`] or [`FixedCountCurve`]) directly on its parameter
//! struct, and [`CurveFamily`] ties it to a [`SamplingMode`].
//!
//! [`ParametricCurve`]: crate::sampling::ParametricCurve
//! [`IntegratedCurve`]: crate::sampling::IntegratedCurve
//! [`FixedCountCurve`]: crate::sampling::FixedCountCurve

mod clothoid;
mod cycloidal_stars;
mod fourier;
mod harmonograph;
mod lissajous;
mod log_spiral;
mod maurer_rose;
mod phyllotaxis;
mod polar_harmonics;
mod rhodonea;
mod rose_mix;
mod superellipse;
mod superformula;
mod trochoid;

pub use clothoid::ClothoidParams;
pub use cycloidal_stars::CycloidalStarsParams;
pub use fourier::{FourierParams, FourierTerm};
pub use harmonograph::{HarmonographParams, TimeSpan, XTerm, YTerm};
pub use lissajous::LissajousParams;
pub use log_spiral::LogSpiralParams;
pub use maurer_rose::MaurerRoseParams;
pub use phyllotaxis::{Connect, PhyllotaxisParams};
pub use polar_harmonics::{
    AmTerm, ClosureMode, ClosureSettings, FmTerm, Modulation, PolarHarmonicsParams, PolarTerm,
    ThetaSpan,
};
pub use rhodonea::RhodoneaParams;
pub use rose_mix::{RoseMixParams, RoseTerm};
pub use superellipse::SuperellipseParams;
pub use superformula::SuperformulaParams;
pub use trochoid::{TrochoidKind, TrochoidParams};

use crate::sampling::{QualityConfig, SampledCurve, SamplingMode, StatsExtras};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Substitute for zero divisors and exponents.
pub(crate) const TINY: f64 = 1e-9;

/// A curve family that can be sampled into a polyline.
pub trait CurveFamily {
    /// The sampling strategy, borrowing the parameters.
    fn mode(&self) -> SamplingMode<'_>;

    /// Base closure period in parameter units, if the family is periodic.
    fn period(&self) -> Option<f64> {
        None
    }

    /// Family-specific stats.
    fn extras(&self) -> StatsExtras {
        StatsExtras::None
    }

    /// Samples the curve under `quality`.
    fn sample(&self, quality: &QualityConfig) -> SampledCurve {
        let sampled = self.mode().run(quality).with_extras(self.extras());
        match self.period() {
            Some(period) => sampled.with_period(period),
            None => sampled,
        }
    }
}

/// How many base periods to sample.
///
/// Deserializes from the string `"auto"` (one period) or a number of laps.
/// Numbers are floored and values below 1 count as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "TurnsRepr", into = "TurnsRepr")]
pub enum Turns {
    #[default]
    Auto,
    Laps(u32),
}

impl Turns {
    /// Multiplier applied to the base period.
    pub fn multiplier(self) -> f64 {
        match self {
            Turns::Auto => 1.0,
            Turns::Laps(n) => f64::from(n.max(1)),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TurnsRepr {
    Keyword(String),
    Count(f64),
}

impl TryFrom<TurnsRepr> for Turns {
    type Error = String;

    fn try_from(repr: TurnsRepr) -> Result<Self, Self::Error> {
        match repr {
            TurnsRepr::Keyword(s) if s == "auto" => Ok(Turns::Auto),
            TurnsRepr::Keyword(s) => Err(format!("expected \"auto\" or a number, got {s:?}")),
            TurnsRepr::Count(n) if n.is_finite() && n >= 1.0 => {
                Ok(Turns::Laps(n.floor().min(f64::from(u32::MAX)) as u32))
            }
            TurnsRepr::Count(_) => Ok(Turns::Laps(1)),
        }
    }
}

impl From<Turns> for TurnsRepr {
    fn from(turns: Turns) -> Self {
        match turns {
            Turns::Auto => TurnsRepr::Keyword("auto".to_owned()),
            Turns::Laps(n) => TurnsRepr::Count(f64::from(n)),
        }
    }
}

/// Periodic function selector for rose-like terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wave {
    #[default]
    Cos,
    Sin,
}

impl Wave {
    /// Evaluates the wave at `x`.
    #[inline]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Wave::Cos => x.cos(),
            Wave::Sin => x.sin(),
        }
    }

    /// Phase added to a rose's cosine argument when this wave is selected as
    /// its variant. Roses never evaluate `sin` directly.
    #[inline]
    pub fn phase_shift(self) -> f64 {
        match self {
            Wave::Cos => 0.0,
            Wave::Sin => std::f64::consts::FRAC_PI_2,
        }
    }
}

/// Translation applied after evaluation, serialized as `{ "x", "y" }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

/// Domain end for a family with a `2π` base period.
pub(crate) fn laps_span(turns: Turns) -> f64 {
    TAU * turns.multiplier()
}

/// Replaces an exact zero with [`TINY`].
#[inline]
pub(crate) fn nonzero(v: f64) -> f64 {
    if v == 0.0 {
        TINY
    } else {
        v
    }
}
