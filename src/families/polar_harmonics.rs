//! Sums of polar harmonics with amplitude and frequency modulation.
//!
//! The radius is a base value plus cosine harmonics of a frequency-modulated
//! angle, and the resulting point is scaled by an amplitude envelope:
//!
//! ```text
//! θ' = θ + Σ b sin(kθ + φ)          (FM)
//! s  = 1 + Σ a cos(kθ + φ)          (AM)
//! r  = R0 + Σ A cos(mθ' + φ)
//! p  = s · r · (cos θ, sin θ)
//! ```

use super::CurveFamily;
use crate::primitives::Point2;
use crate::ratio::lcm_all;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// One radial harmonic `A cos(mθ' + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarTerm {
    #[serde(rename = "A")]
    pub amplitude: f64,
    pub m: f64,
    pub phi: f64,
}

/// Amplitude-modulation term `a cos(kθ + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmTerm {
    pub a: f64,
    pub k: f64,
    pub phi: f64,
}

/// Frequency-modulation term `b sin(kθ + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FmTerm {
    pub b: f64,
    pub k: f64,
    pub phi: f64,
}

/// AM and FM term lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modulation {
    #[serde(rename = "AM")]
    pub am: Vec<AmTerm>,
    #[serde(rename = "FM")]
    pub fm: Vec<FmTerm>,
}

/// Angular range to sample.
///
/// Deserializes from `"auto"` or a `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "ThetaSpanRepr", into = "ThetaSpanRepr")]
pub enum ThetaSpan {
    /// `2π` times the LCM of all integer harmonic frequencies.
    #[default]
    Auto,
    /// Explicit range. An end of zero means one lap from `start`.
    Range { start: f64, end: f64 },
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ThetaSpanRepr {
    Keyword(String),
    Range([f64; 2]),
}

impl TryFrom<ThetaSpanRepr> for ThetaSpan {
    type Error = String;

    fn try_from(repr: ThetaSpanRepr) -> Result<Self, Self::Error> {
        match repr {
            ThetaSpanRepr::Keyword(s) if s == "auto" => Ok(ThetaSpan::Auto),
            ThetaSpanRepr::Keyword(s) => {
                Err(format!("expected \"auto\" or [start, end], got {s:?}"))
            }
            ThetaSpanRepr::Range([start, end]) => Ok(ThetaSpan::Range { start, end }),
        }
    }
}

impl From<ThetaSpan> for ThetaSpanRepr {
    fn from(span: ThetaSpan) -> Self {
        match span {
            ThetaSpan::Auto => ThetaSpanRepr::Keyword("auto".to_owned()),
            ThetaSpan::Range { start, end } => ThetaSpanRepr::Range([start, end]),
        }
    }
}

/// Whether closure is detected from the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureMode {
    #[default]
    Auto,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureSettings {
    pub mode: ClosureMode,
}

/// Parameters of a polar harmonic sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarHarmonicsParams {
    /// Base radius.
    #[serde(rename = "R0")]
    pub r0: f64,
    pub terms: Vec<PolarTerm>,
    pub fm: Modulation,
    pub theta_span: ThetaSpan,
    pub closure: ClosureSettings,
}

impl Default for PolarHarmonicsParams {
    fn default() -> Self {
        Self {
            r0: 120.0,
            terms: vec![
                PolarTerm {
                    amplitude: 18.0,
                    m: 12.0,
                    phi: 0.0,
                },
                PolarTerm {
                    amplitude: 7.0,
                    m: 36.0,
                    phi: PI / 6.0,
                },
            ],
            fm: Modulation {
                am: vec![AmTerm {
                    a: 0.08,
                    k: 6.0,
                    phi: 0.0,
                }],
                fm: Vec::new(),
            },
            theta_span: ThetaSpan::Auto,
            closure: ClosureSettings::default(),
        }
    }
}

/// Integer part of a frequency's magnitude, the way closure detection reads it.
fn integer_frequency(f: f64) -> u64 {
    if f.is_finite() {
        f.abs().trunc().min(u32::MAX as f64) as u64
    } else {
        0
    }
}

impl PolarHarmonicsParams {
    /// Distinct non-zero integer frequencies of all harmonic, AM and FM terms.
    fn frequencies(&self) -> impl Iterator<Item = u64> + '_ {
        let terms = self.terms.iter().map(|t| t.m);
        let am = self.fm.am.iter().map(|t| t.k);
        let fm = self.fm.fm.iter().map(|t| t.k);
        terms.chain(am).chain(fm).map(integer_frequency)
    }

    /// Angle after which every integer harmonic has completed whole cycles:
    /// `2π · LCM(frequencies)`, or `2π` if there are none.
    pub fn auto_period(&self) -> f64 {
        TAU * lcm_all(self.frequencies()) as f64
    }

    fn span(&self) -> Domain {
        match self.theta_span {
            ThetaSpan::Auto => Domain::new(0.0, self.auto_period()),
            ThetaSpan::Range { start, end } => {
                let start = if start.is_finite() { start } else { 0.0 };
                let end = if end.is_finite() && end != 0.0 {
                    end
                } else {
                    start + TAU
                };
                Domain::new(start, end)
            }
        }
    }
}

impl ParametricCurve for PolarHarmonicsParams {
    fn domain(&self) -> Domain {
        self.span()
    }

    fn eval(&self, theta: f64) -> Point2<f64> {
        let modulated = theta
            + self
                .fm
                .fm
                .iter()
                .map(|t| t.b * (t.k * theta + t.phi).sin())
                .sum::<f64>();
        let scale = 1.0
            + self
                .fm
                .am
                .iter()
                .map(|t| t.a * (t.k * theta + t.phi).cos())
                .sum::<f64>();
        let r = self.r0
            + self
                .terms
                .iter()
                .map(|t| t.amplitude * (t.m * modulated + t.phi).cos())
                .sum::<f64>();
        Point2::from_polar(scale * r, theta)
    }

    fn closure(&self) -> ClosureRule {
        match self.closure.mode {
            ClosureMode::Auto => ClosureRule::Threshold(0.5),
            ClosureMode::Open => ClosureRule::Open,
        }
    }
}

impl CurveFamily for PolarHarmonicsParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        match self.theta_span {
            ThetaSpan::Auto => Some(self.auto_period()),
            ThetaSpan::Range { .. } => None,
        }
    }
}
