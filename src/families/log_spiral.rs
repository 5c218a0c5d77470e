//! Logarithmic spirals with an optional radial wobble.

use super::{CurveFamily, Turns};
use crate::primitives::Point2;
use crate::sampling::{AdaptiveCurve, ClosureRule, Domain, ParametricCurve, SamplingMode};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::polar_harmonics::AmTerm;

/// Floor of the wobble factor, keeping the radius positive.
const MIN_WOBBLE: f64 = 1e-6;

/// Parameters of a logarithmic spiral, `r = a e^{bt} · wobble(t)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSpiralParams {
    /// Radius at `t = 0`.
    pub a: f64,
    /// Growth rate. Negative values spiral inwards.
    pub b: f64,
    /// Wobble terms `a cos(kt + φ)` added to 1.
    #[serde(rename = "AM")]
    pub am: Vec<AmTerm>,
    /// Start angle.
    pub theta0: f64,
    pub turns: Turns,
}

impl Default for LogSpiralParams {
    fn default() -> Self {
        Self {
            a: 2.0,
            b: 0.12,
            am: vec![AmTerm {
                a: 0.12,
                k: 6.0,
                phi: 0.0,
            }],
            theta0: 0.0,
            turns: Turns::Laps(6),
        }
    }
}

impl LogSpiralParams {
    /// Radius at angle `t`.
    pub fn radius(&self, t: f64) -> f64 {
        let wobble = 1.0
            + self
                .am
                .iter()
                .map(|term| term.a * (term.k * t + term.phi).cos())
                .sum::<f64>();
        self.a * (self.b * t).exp() * wobble.max(MIN_WOBBLE)
    }
}

impl ParametricCurve for LogSpiralParams {
    fn domain(&self) -> Domain {
        Domain::new(self.theta0, self.theta0 + TAU * self.turns.multiplier())
    }

    fn eval(&self, t: f64) -> Point2<f64> {
        Point2::from_polar(self.radius(t), t)
    }

    fn closure(&self) -> ClosureRule {
        ClosureRule::Open
    }
}

impl CurveFamily for LogSpiralParams {
    fn mode(&self) -> SamplingMode<'_> {
        SamplingMode::Adaptive(AdaptiveCurve::Evaluated(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::QualityConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_domain_defaults_to_six_laps() {
        let d = LogSpiralParams::default().domain();
        assert_eq!(d.start, 0.0);
        assert_relative_eq!(d.end, 6.0 * TAU);

        let auto = LogSpiralParams {
            theta0: 1.0,
            turns: Turns::Auto,
            ..LogSpiralParams::default()
        };
        assert_relative_eq!(auto.domain().end, 1.0 + TAU);
    }

    #[test]
    fn test_pure_spiral_growth() {
        let params = LogSpiralParams {
            am: Vec::new(),
            ..LogSpiralParams::default()
        };
        assert_relative_eq!(params.radius(0.0), 2.0);
        assert_relative_eq!(params.radius(TAU), 2.0 * (0.12 * TAU).exp());
    }

    #[test]
    fn test_wobble_is_floored() {
        let params = LogSpiralParams {
            am: vec![AmTerm {
                a: 5.0,
                k: 0.0,
                phi: std::f64::consts::PI,
            }],
            ..LogSpiralParams::default()
        };
        // 1 + 5 cos(π) = -4, floored.
        assert_relative_eq!(params.radius(0.0), 2.0 * MIN_WOBBLE);
    }

    #[test]
    fn test_is_open() {
        let sampled = LogSpiralParams::default().sample(&QualityConfig::default());
        assert!(!sampled.path.closed);
        assert_eq!(sampled.stats.period, None);
    }

    #[test]
    fn test_json_names() {
        let params: LogSpiralParams =
            serde_json::from_str(r#"{ "AM": [{ "a": 0.3, "k": 4 }], "turns": "auto" }"#).unwrap();
        assert_eq!(params.am[0].a, 0.3);
        assert_eq!(params.turns, Turns::Auto);
    }
}
