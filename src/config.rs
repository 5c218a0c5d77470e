//! Curve configuration: method names, the tagged parameter union, and
//! parsing from untyped JSON.
//!
//! A configuration is a `{ method, params, quality }` record. Parameters are
//! checked once, here; after that the engine only sees typed structs.
//!
//! # Example
//!
//! ```
//! use guilloche::config::{CurveConfig, Method};
//!
//! let config = CurveConfig::from_json(
//!     r#"{ "method": "lissajous", "params": { "a": 5, "b": 4 }, "quality": { "maxVerts": 20000 } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.method().unwrap(), Method::Lissajous);
//!
//! let sampled = config.sample().unwrap();
//! assert!(sampled.stats.vertices <= 20_000);
//! ```

use crate::error::GuillocheError;
use crate::families::{
    ClothoidParams, CurveFamily, CycloidalStarsParams, FourierParams, HarmonographParams,
    LissajousParams, LogSpiralParams, MaurerRoseParams, PhyllotaxisParams, PolarHarmonicsParams,
    RhodoneaParams, RoseMixParams, SuperellipseParams, SuperformulaParams, TrochoidParams,
};
use crate::sampling::{QualityConfig, SampledCurve};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Name of a curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    PolarHarmonics,
    Trochoid,
    Lissajous,
    Harmonograph,
    Rhodonea,
    Superformula,
    MaurerRose,
    Superellipse,
    Fourier,
    LogSpiral,
    CycloidalStars,
    Phyllotaxis,
    RoseMix,
    Clothoid,
}

impl Method {
    /// Every method, in menu order.
    pub const ALL: [Method; 14] = [
        Method::PolarHarmonics,
        Method::Trochoid,
        Method::Lissajous,
        Method::Harmonograph,
        Method::Rhodonea,
        Method::Superformula,
        Method::MaurerRose,
        Method::Superellipse,
        Method::Fourier,
        Method::LogSpiral,
        Method::CycloidalStars,
        Method::Phyllotaxis,
        Method::RoseMix,
        Method::Clothoid,
    ];

    /// The configuration name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::PolarHarmonics => "polar_harmonics",
            Method::Trochoid => "trochoid",
            Method::Lissajous => "lissajous",
            Method::Harmonograph => "harmonograph",
            Method::Rhodonea => "rhodonea",
            Method::Superformula => "superformula",
            Method::MaurerRose => "maurer_rose",
            Method::Superellipse => "superellipse",
            Method::Fourier => "fourier",
            Method::LogSpiral => "log_spiral",
            Method::CycloidalStars => "cycloidal_stars",
            Method::Phyllotaxis => "phyllotaxis",
            Method::RoseMix => "rose_mix",
            Method::Clothoid => "clothoid",
        }
    }

    /// Returns `true` for the families that emit a prescribed number of
    /// points instead of stepping adaptively.
    pub fn is_fixed_count(self) -> bool {
        matches!(self, Method::MaurerRose | Method::Phyllotaxis)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = GuillocheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| GuillocheError::UnknownMethod(s.to_owned()))
    }
}

/// Parameters of any curve family, tagged by method.
///
/// Serializes as `{ "method": ..., "params": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum CurveParams {
    PolarHarmonics(PolarHarmonicsParams),
    Trochoid(TrochoidParams),
    Lissajous(LissajousParams),
    Harmonograph(HarmonographParams),
    Rhodonea(RhodoneaParams),
    Superformula(SuperformulaParams),
    MaurerRose(MaurerRoseParams),
    Superellipse(SuperellipseParams),
    Fourier(FourierParams),
    LogSpiral(LogSpiralParams),
    CycloidalStars(CycloidalStarsParams),
    Phyllotaxis(PhyllotaxisParams),
    RoseMix(RoseMixParams),
    Clothoid(ClothoidParams),
}

impl CurveParams {
    /// The family defaults for `method`.
    pub fn defaults(method: Method) -> Self {
        match method {
            Method::PolarHarmonics => CurveParams::PolarHarmonics(Default::default()),
            Method::Trochoid => CurveParams::Trochoid(Default::default()),
            Method::Lissajous => CurveParams::Lissajous(Default::default()),
            Method::Harmonograph => CurveParams::Harmonograph(Default::default()),
            Method::Rhodonea => CurveParams::Rhodonea(Default::default()),
            Method::Superformula => CurveParams::Superformula(Default::default()),
            Method::MaurerRose => CurveParams::MaurerRose(Default::default()),
            Method::Superellipse => CurveParams::Superellipse(Default::default()),
            Method::Fourier => CurveParams::Fourier(Default::default()),
            Method::LogSpiral => CurveParams::LogSpiral(Default::default()),
            Method::CycloidalStars => CurveParams::CycloidalStars(Default::default()),
            Method::Phyllotaxis => CurveParams::Phyllotaxis(Default::default()),
            Method::RoseMix => CurveParams::RoseMix(Default::default()),
            Method::Clothoid => CurveParams::Clothoid(Default::default()),
        }
    }

    /// Reads parameters for `method` from a JSON value.
    ///
    /// Missing fields take the family defaults; a mistyped field is an error.
    pub fn from_value(method: Method, value: &Value) -> Result<Self, GuillocheError> {
        Ok(match method {
            Method::PolarHarmonics => CurveParams::PolarHarmonics(parse(method, value)?),
            Method::Trochoid => CurveParams::Trochoid(parse(method, value)?),
            Method::Lissajous => CurveParams::Lissajous(parse(method, value)?),
            Method::Harmonograph => CurveParams::Harmonograph(parse(method, value)?),
            Method::Rhodonea => CurveParams::Rhodonea(parse(method, value)?),
            Method::Superformula => CurveParams::Superformula(parse(method, value)?),
            Method::MaurerRose => CurveParams::MaurerRose(parse(method, value)?),
            Method::Superellipse => CurveParams::Superellipse(parse(method, value)?),
            Method::Fourier => CurveParams::Fourier(parse(method, value)?),
            Method::LogSpiral => CurveParams::LogSpiral(parse(method, value)?),
            Method::CycloidalStars => CurveParams::CycloidalStars(parse(method, value)?),
            Method::Phyllotaxis => CurveParams::Phyllotaxis(parse(method, value)?),
            Method::RoseMix => CurveParams::RoseMix(parse(method, value)?),
            Method::Clothoid => CurveParams::Clothoid(parse(method, value)?),
        })
    }

    /// The method these parameters belong to.
    pub fn method(&self) -> Method {
        match self {
            CurveParams::PolarHarmonics(_) => Method::PolarHarmonics,
            CurveParams::Trochoid(_) => Method::Trochoid,
            CurveParams::Lissajous(_) => Method::Lissajous,
            CurveParams::Harmonograph(_) => Method::Harmonograph,
            CurveParams::Rhodonea(_) => Method::Rhodonea,
            CurveParams::Superformula(_) => Method::Superformula,
            CurveParams::MaurerRose(_) => Method::MaurerRose,
            CurveParams::Superellipse(_) => Method::Superellipse,
            CurveParams::Fourier(_) => Method::Fourier,
            CurveParams::LogSpiral(_) => Method::LogSpiral,
            CurveParams::CycloidalStars(_) => Method::CycloidalStars,
            CurveParams::Phyllotaxis(_) => Method::Phyllotaxis,
            CurveParams::RoseMix(_) => Method::RoseMix,
            CurveParams::Clothoid(_) => Method::Clothoid,
        }
    }

    /// The parameters as a sampleable family.
    pub fn family(&self) -> &dyn CurveFamily {
        match self {
            CurveParams::PolarHarmonics(p) => p,
            CurveParams::Trochoid(p) => p,
            CurveParams::Lissajous(p) => p,
            CurveParams::Harmonograph(p) => p,
            CurveParams::Rhodonea(p) => p,
            CurveParams::Superformula(p) => p,
            CurveParams::MaurerRose(p) => p,
            CurveParams::Superellipse(p) => p,
            CurveParams::Fourier(p) => p,
            CurveParams::LogSpiral(p) => p,
            CurveParams::CycloidalStars(p) => p,
            CurveParams::Phyllotaxis(p) => p,
            CurveParams::RoseMix(p) => p,
            CurveParams::Clothoid(p) => p,
        }
    }

    /// Samples the curve under `quality`.
    pub fn sample(&self, quality: &QualityConfig) -> SampledCurve {
        self.family().sample(quality)
    }
}

fn parse<T: DeserializeOwned>(method: Method, value: &Value) -> Result<T, GuillocheError> {
    T::deserialize(value).map_err(|source| GuillocheError::InvalidParams {
        method: method.to_string(),
        source,
    })
}

/// A curve configuration as read from JSON.
///
/// Fields other than `method`, `params` and `quality` (stroke, view, version)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(default)]
    pub quality: QualityConfig,
}

impl CurveConfig {
    /// Builds a configuration from typed parameters.
    pub fn new(params: &CurveParams, quality: QualityConfig) -> Result<Self, GuillocheError> {
        let value = serde_json::to_value(params)?;
        Ok(Self {
            method: params.method().to_string(),
            params: value.get("params").cloned(),
            quality,
        })
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, GuillocheError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, GuillocheError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The selected method.
    pub fn method(&self) -> Result<Method, GuillocheError> {
        self.method.parse()
    }

    /// The checked parameters. Missing or `null` params give the family
    /// defaults.
    pub fn params(&self) -> Result<CurveParams, GuillocheError> {
        let method = self.method()?;
        match &self.params {
            None | Some(Value::Null) => {
                log::debug!("no params for {method}, using defaults");
                Ok(CurveParams::defaults(method))
            }
            Some(value) => CurveParams::from_value(method, value),
        }
    }

    /// Checks the parameters and samples the curve.
    pub fn sample(&self) -> Result<SampledCurve, GuillocheError> {
        let params = self.params()?;
        let sampled = params.sample(&self.quality);
        log::debug!(
            "sampled {}: {} vertices, {:.1} px, closed = {}",
            self.method,
            sampled.stats.vertices,
            sampled.stats.length_px,
            sampled.path.closed
        );
        Ok(sampled)
    }
}
