//! Named starting points, one per method.
//!
//! Most presets equal the family defaults. The exceptions are the polar
//! harmonics "classic" pattern, the shorter two-pendulum harmonograph, the
//! 300-seed spline phyllotaxis and the 6/12 rose mix.

use crate::config::{CurveParams, Method};
use crate::families::{
    Connect, HarmonographParams, PhyllotaxisParams, RoseMixParams, RoseTerm, TimeSpan, Wave,
    XTerm, YTerm,
};
use std::f64::consts::PI;

/// The preset parameters for `method`.
///
/// # Example
///
/// ```
/// use guilloche::config::Method;
/// use guilloche::presets::preset;
/// use guilloche::QualityConfig;
///
/// let sampled = preset(Method::CycloidalStars).sample(&QualityConfig::default());
/// assert!(sampled.path.closed);
/// ```
pub fn preset(method: Method) -> CurveParams {
    match method {
        Method::Harmonograph => CurveParams::Harmonograph(harmonograph()),
        Method::Phyllotaxis => CurveParams::Phyllotaxis(PhyllotaxisParams {
            n_points: 300,
            connect: Connect::Spline,
            ..PhyllotaxisParams::default()
        }),
        Method::RoseMix => CurveParams::RoseMix(RoseMixParams {
            term1: RoseTerm::new(120.0, 6.0, 0.0, Wave::Cos),
            term2: RoseTerm::new(60.0, 12.0, PI / 6.0, Wave::Cos),
            ..RoseMixParams::default()
        }),
        other => CurveParams::defaults(other),
    }
}

fn harmonograph() -> HarmonographParams {
    HarmonographParams {
        x_terms: vec![
            XTerm {
                amplitude: 280.0,
                omega: 0.5,
                phi: 1.57,
                decay: 0.0007,
            },
            XTerm {
                amplitude: 50.0,
                omega: 17.5,
                phi: 1.57,
                decay: 0.0001,
            },
        ],
        y_terms: vec![
            YTerm {
                amplitude: 280.0,
                nu: 1.5,
                psi: 0.0,
                decay: 0.0007,
            },
            YTerm {
                amplitude: 50.0,
                nu: 11.0,
                psi: 0.5,
                decay: 0.0001,
            },
        ],
        t: TimeSpan {
            start: 0.0,
            end: 90.0,
        },
    }
}
