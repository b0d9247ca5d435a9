//! Configuration for the optional solid validation layer.

use crate::Tolerance;

/// Configuration controlling which checks are run.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Tolerance thresholds.
    pub tolerance: Tolerance,
    /// Check shape parameters (finite, positive extents, at least three sides).
    pub check_parameters: bool,
    /// Check the generated planes (finite, non-zero normals, expected count).
    pub check_planes: bool,
    /// Check that the shape's reference point satisfies every half-space.
    pub check_reference_point: bool,
    /// Report non-unit normals as errors rather than warnings.
    pub strict_unit_normals: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            check_parameters: true,
            check_planes: true,
            check_reference_point: true,
            strict_unit_normals: false,
        }
    }
}

impl ValidationConfig {
    /// Parameter checks only (fastest; no planes are generated).
    pub fn parameters() -> Self {
        Self {
            check_planes: false,
            check_reference_point: false,
            ..Self::default()
        }
    }

    /// Everything, with non-unit normals treated as errors.
    pub fn strict() -> Self {
        Self {
            strict_unit_normals: true,
            ..Self::default()
        }
    }
}
