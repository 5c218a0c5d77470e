//! Two-dimensional Fourier series (epicycle curves).

use super::{laps_span, Center, CurveFamily, Turns, Wave};
use crate::primitives::Point2;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// One series term `amp · F(freq · t + phase)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FourierTerm {
    pub kind: Wave,
    pub amp: f64,
    pub freq: f64,
    pub phase: f64,
}

impl FourierTerm {
    pub fn new(kind: Wave, amp: f64, freq: f64, phase: f64) -> Self {
        Self {
            kind,
            amp,
            freq,
            phase,
        }
    }

    #[inline]
    fn eval(&self, t: f64) -> f64 {
        self.amp * self.kind.eval(self.freq * t + self.phase)
    }
}

/// Parameters of a Fourier curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FourierParams {
    pub x_terms: Vec<FourierTerm>,
    pub y_terms: Vec<FourierTerm>,
    pub center: Center,
    pub turns: Turns,
}

impl Default for FourierParams {
    fn default() -> Self {
        Self {
            x_terms: vec![
                FourierTerm::new(Wave::Cos, 120.0, 3.0, 0.0),
                FourierTerm::new(Wave::Sin, 35.0, 9.0, 0.0),
            ],
            y_terms: vec![
                FourierTerm::new(Wave::Cos, 120.0, 2.0, PI / 4.0),
                FourierTerm::new(Wave::Sin, 40.0, 5.0, PI / 3.0),
            ],
            center: Center::default(),
            turns: Turns::Auto,
        }
    }
}

fn series(terms: &[FourierTerm], t: f64) -> f64 {
    terms.iter().map(|term| term.eval(t)).sum()
}

impl ParametricCurve for FourierParams {
    fn domain(&self) -> Domain {
        Domain::new(0.0, laps_span(self.turns))
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        Point2::new(
            self.center.x + series(&self.x_terms, t),
            self.center.y + series(&self.y_terms, t),
        )
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Threshold(0.7)
    }
}

impl CurveFamily for FourierParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }

    fn period(&self) -> Option<f64> {
        Some(TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::QualityConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_terms_draw_a_circle() {
        let params = FourierParams {
            x_terms: vec![FourierTerm::new(Wave::Cos, 60.0, 1.0, 0.0)],
            y_terms: vec![FourierTerm::new(Wave::Sin, 60.0, 1.0, 0.0)],
            center: Center { x: 10.0, y: -5.0 },
            turns: Turns::Auto,
        };
        let sampled = params.sample(&QualityConfig::default());
        assert!(sampled.path.closed);
        let c = Point2::new(10.0, -5.0);
        for p in sampled.points() {
            assert_relative_eq!(p.distance(c), 60.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_empty_series_is_a_point() {
        let params = FourierParams {
            x_terms: Vec::new(),
            y_terms: Vec::new(),
            ..FourierParams::default()
        };
        let sampled = params.sample(&QualityConfig::default());
        assert_eq!(sampled.stats.length_px, 0.0);
        let bbox = sampled.bbox.unwrap();
        assert_eq!(bbox.width(), 0.0);
    }

    #[test]
    fn test_start_point() {
        let p = FourierParams::default().eval(0.0);
        assert_relative_eq!(p.x, 120.0);
        assert_relative_eq!(
            p.y,
            120.0 * (PI / 4.0).cos() + 40.0 * (PI / 3.0).sin(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_term_defaults() {
        let params: FourierParams =
            serde_json::from_str(r#"{ "x_terms": [{ "amp": 5 }], "turns": 2 }"#).unwrap();
        assert_eq!(params.x_terms, vec![FourierTerm::new(Wave::Cos, 5.0, 0.0, 0.0)]);
        assert_eq!(params.y_terms.len(), 2);
        assert_relative_eq!(params.domain().end, 2.0 * TAU);
    }
}
