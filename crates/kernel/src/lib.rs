pub mod geometry;
pub mod solids;
pub mod validation;

// Re-export the common entry points at crate root for convenience.
pub use geometry::plane::Plane;
pub use geometry::point::Point3d;
pub use geometry::vector::Vec3;
pub use solids::{
    make_box, make_cube, make_prism, make_pyramid, BoxParams, CubeParams, PrismParams,
    PyramidParams, SolidShape,
};
pub use validation::{SolidError, SolidValidator, ValidationConfig, ValidationReport};

/// Global tolerance configuration for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Signed distances within this band count as lying on a plane.
    pub coincidence: f64,
    /// Allowed deviation of a normal's length from 1.0 before it is reported as non-unit.
    pub unit_length: f64,
    /// Vectors shorter than this cannot be normalized.
    pub zero_length: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-7,
            unit_length: 1e-9,
            zero_length: 1e-15,
        }
    }
}

impl Tolerance {
    pub fn is_zero_length(&self, length: f64) -> bool {
        length.abs() < self.zero_length
    }

    pub fn is_unit_length(&self, length: f64) -> bool {
        (length - 1.0).abs() < self.unit_length
    }

    /// True when a signed distance is on the interior side of a plane, boundary included.
    pub fn is_inside(&self, signed_distance: f64) -> bool {
        signed_distance <= self.coincidence
    }
}

/// Default tolerance used by the generators and validator.
pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}
