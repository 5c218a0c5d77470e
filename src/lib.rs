//! guilloche - Adaptive discretization of decorative parametric curves
//!
//! Roses, trochoids, Lissajous figures, harmonographs, clothoids and friends,
//! turned into polylines whose segments stay short and whose turns stay gentle.
//! A curve is described by a [`CurveConfig`] (method name, parameters, sampling
//! quality) and sampled into a [`SampledCurve`] carrying the path, its bounding
//! box and summary statistics.

pub mod bounds;
pub mod config;
pub mod curves;
pub mod error;
pub mod families;
pub mod presets;
pub mod primitives;
pub mod ratio;
pub mod sampling;

pub use bounds::Aabb2;
pub use config::{CurveConfig, CurveParams, Method};
pub use error::GuillocheError;
pub use families::CurveFamily;
pub use primitives::{Point2, Vec2};
pub use sampling::{QualityConfig, SampledCurve};
