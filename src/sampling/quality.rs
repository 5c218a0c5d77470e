//! Discretization budget shared by every curve family.

use serde::{Deserialize, Serialize};

/// Smallest angular step the samplers will use, in radians.
const MIN_ANGLE_STEP_RAD: f64 = 1e-4;

/// Tunable discretization budget.
///
/// Missing fields take the defaults (0.35°, 2.0 px, 120 000 vertices) when
/// deserialized. The samplers call [`sanitized`](Self::sanitized) before use,
/// so out-of-range values never reach the stepping loop.
///
/// # Example
///
/// ```
/// use guilloche::QualityConfig;
///
/// let q: QualityConfig = serde_json::from_str(r#"{ "maxSegLenPx": 1.0 }"#).unwrap();
/// assert_eq!(q.max_seg_len_px, 1.0);
/// assert_eq!(q.max_verts, 120_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityConfig {
    /// Nominal angular step in degrees. Also the turn-angle budget (×1.5).
    pub max_angle_step_deg: f64,
    /// Longest allowed chord between consecutive vertices, in pixels.
    pub max_seg_len_px: f64,
    /// Hard cap on emitted vertices.
    pub max_verts: usize,
}

impl QualityConfig {
    pub const DEFAULT_MAX_ANGLE_STEP_DEG: f64 = 0.35;
    pub const DEFAULT_MAX_SEG_LEN_PX: f64 = 2.0;
    pub const DEFAULT_MAX_VERTS: usize = 120_000;

    /// Creates a config from explicit values.
    pub fn new(max_angle_step_deg: f64, max_seg_len_px: f64, max_verts: usize) -> Self {
        Self {
            max_angle_step_deg,
            max_seg_len_px,
            max_verts,
        }
    }

    /// Returns a copy with non-finite or non-positive fields replaced by the
    /// defaults.
    pub fn sanitized(self) -> Self {
        let positive = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        let sanitized = Self {
            max_angle_step_deg: positive(self.max_angle_step_deg, Self::DEFAULT_MAX_ANGLE_STEP_DEG),
            max_seg_len_px: positive(self.max_seg_len_px, Self::DEFAULT_MAX_SEG_LEN_PX),
            max_verts: if self.max_verts > 0 {
                self.max_verts
            } else {
                Self::DEFAULT_MAX_VERTS
            },
        };
        if sanitized != self {
            log::debug!("quality {:?} replaced by {:?}", self, sanitized);
        }
        sanitized
    }

    /// The angular step in radians, never below `1e-4`.
    #[inline]
    pub fn max_angle_step_rad(&self) -> f64 {
        self.max_angle_step_deg.to_radians().max(MIN_ANGLE_STEP_RAD)
    }
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_angle_step_deg: Self::DEFAULT_MAX_ANGLE_STEP_DEG,
            max_seg_len_px: Self::DEFAULT_MAX_SEG_LEN_PX,
            max_verts: Self::DEFAULT_MAX_VERTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let q = QualityConfig::default();
        assert_eq!(q.max_angle_step_deg, 0.35);
        assert_eq!(q.max_seg_len_px, 2.0);
        assert_eq!(q.max_verts, 120_000);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let q: QualityConfig = serde_json::from_str(r#"{ "maxVerts": 500 }"#).unwrap();
        assert_eq!(q.max_verts, 500);
        assert_eq!(q.max_angle_step_deg, 0.35);
        assert_eq!(q.max_seg_len_px, 2.0);

        let empty: QualityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, QualityConfig::default());
    }

    #[test]
    fn test_sanitized_replaces_bad_values() {
        let q = QualityConfig::new(-1.0, f64::NAN, 0).sanitized();
        assert_eq!(q, QualityConfig::default());

        let ok = QualityConfig::new(1.0, 0.5, 10);
        assert_eq!(ok.sanitized(), ok);
    }

    #[test]
    fn test_angle_step_radians() {
        let q = QualityConfig::new(180.0, 2.0, 10);
        assert_relative_eq!(q.max_angle_step_rad(), std::f64::consts::PI, epsilon = 1e-12);

        let tiny = QualityConfig::new(1e-9, 2.0, 10);
        assert_eq!(tiny.max_angle_step_rad(), 1e-4);
    }
}
