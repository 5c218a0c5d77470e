//! Damped pendulum figures.

use super::CurveFamily;
use crate::primitives::Point2;
use crate::sampling::{
    AdaptiveCurve, ClosureRule, Domain, ParametricCurve, QualityConfig, SamplingMode,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const MIN_AVERAGE_FREQUENCY: f64 = 0.1;
const MIN_STEP: f64 = 0.002;
const MAX_STEP: f64 = 2.0;

/// Horizontal pendulum `A e^{−decay·t} sin(ω t + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct XTerm {
    #[serde(rename = "A")]
    pub amplitude: f64,
    pub omega: f64,
    pub phi: f64,
    pub decay: f64,
}

/// Vertical pendulum `B e^{−decay·t} sin(ν t + ψ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YTerm {
    #[serde(rename = "B")]
    pub amplitude: f64,
    pub nu: f64,
    pub psi: f64,
    pub decay: f64,
}

/// Time range in arbitrary units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 800.0,
        }
    }
}

/// Parameters of a harmonograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonographParams {
    pub x_terms: Vec<XTerm>,
    pub y_terms: Vec<YTerm>,
    pub t: TimeSpan,
}

impl Default for HarmonographParams {
    fn default() -> Self {
        Self {
            x_terms: vec![XTerm {
                amplitude: 120.0,
                omega: 2.0,
                phi: 0.0,
                decay: 0.005,
            }],
            y_terms: vec![YTerm {
                amplitude: 120.0,
                nu: 2.7,
                psi: 0.0,
                decay: 0.006,
            }],
            t: TimeSpan::default(),
        }
    }
}

impl HarmonographParams {
    /// Trial step of about 7.5° of the mean pendulum frequency, clamped to
    /// `[0.002, 2]`.
    pub fn base_step(&self) -> f64 {
        let total: f64 = self.x_terms.iter().map(|t| t.omega.abs()).sum::<f64>()
            + self.y_terms.iter().map(|t| t.nu.abs()).sum::<f64>();
        let count = (self.x_terms.len() + self.y_terms.len()).max(1) as f64;
        let avg = (total / count).max(MIN_AVERAGE_FREQUENCY);
        ((PI / 24.0) / avg).clamp(MIN_STEP, MAX_STEP)
    }
}

impl ParametricCurve for HarmonographParams {
    fn domain(&self) -> Domain {
        Domain::new(self.t.start, self.t.end)
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        let x = self
            .x_terms
            .iter()
            .map(|p| p.amplitude * (-p.decay * t).exp() * (p.omega * t + p.phi).sin())
            .sum();
        let y = self
            .y_terms
            .iter()
            .map(|p| p.amplitude * (-p.decay * t).exp() * (p.nu * t + p.psi).sin())
            .sum();
        Point2::new(x, y)
    }

    fn initial_step(&self, _t: f64, _quality: &QualityConfig) -> f64 {
        self.base_step()
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Open
    }
}

impl CurveFamily for HarmonographParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_step() {
        // mean of 2.0 and 2.7
        let p = HarmonographParams::default();
        assert_relative_eq!(p.base_step(), (PI / 24.0) / 2.35);

        let still = HarmonographParams {
            x_terms: Vec::new(),
            y_terms: Vec::new(),
            ..HarmonographParams::default()
        };
        assert_relative_eq!(still.base_step(), MAX_STEP.min((PI / 24.0) / 0.1));

        let fast = HarmonographParams {
            x_terms: vec![XTerm {
                amplitude: 1.0,
                omega: 1e4,
                phi: 0.0,
                decay: 0.0,
            }],
            y_terms: Vec::new(),
            ..HarmonographParams::default()
        };
        assert_eq!(fast.base_step(), MIN_STEP);
    }

    #[test]
    fn test_decays_towards_origin() {
        let params = HarmonographParams::default();
        let sampled = params.sample(&QualityConfig::default());
        let pts = sampled.points();
        let last = pts[pts.len() - 1];
        assert!(last.distance(Point2::origin()) < 120.0 * (-0.005_f64 * 800.0).exp() * 2.0);
        assert!(!sampled.path.closed);
    }

    #[test]
    fn test_ends_at_time_end() {
        let params = HarmonographParams {
            t: TimeSpan {
                start: 0.0,
                end: 10.0,
            },
            ..HarmonographParams::default()
        };
        let sampled = params.sample(&QualityConfig::default());
        let last = sampled.points()[sampled.points().len() - 1];
        assert_eq!(last, params.eval(10.0));
    }

    #[test]
    fn test_json_names() {
        let params: HarmonographParams = serde_json::from_str(
            r#"{ "x_terms": [{ "A": 10, "omega": 3 }], "y_terms": [{ "B": 5, "nu": 1, "psi": 0.5 }], "t": { "end": 90, "step": "auto" } }"#,
        )
        .unwrap();
        assert_eq!(params.x_terms[0].amplitude, 10.0);
        assert_eq!(params.y_terms[0].psi, 0.5);
        assert_eq!(params.t.start, 0.0);
        assert_eq!(params.t.end, 90.0);
    }
}
