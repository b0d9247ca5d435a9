use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;

/// An oriented plane `n·x + d = 0` bounding the half-space `n·x + d ≤ 0`.
///
/// The normal points away from the interior. It is not required to be unit
/// length; the renderer only evaluates the sign of the inequality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f64,
}

impl Plane {
    pub fn new(nx: f64, ny: f64, nz: f64, d: f64) -> Self {
        Self {
            normal: Vec3::new(nx, ny, nz),
            d,
        }
    }

    /// Plane through `point` with the given outward normal.
    pub fn through_point(normal: Vec3, point: &Point3d) -> Self {
        Self {
            normal,
            d: -normal.dot(&point.to_vec3()),
        }
    }

    /// Value of `n·p + d`. Negative on the interior side, scaled by `|n|`.
    pub fn signed_distance(&self, p: &Point3d) -> f64 {
        self.normal.dot(&p.to_vec3()) + self.d
    }

    /// Whether `p` satisfies the half-space inequality within `tol`.
    pub fn contains(&self, p: &Point3d, tol: f64) -> bool {
        self.signed_distance(p) <= tol
    }

    pub fn is_finite(&self) -> bool {
        self.normal.is_finite() && self.d.is_finite()
    }

    /// The `(nx, ny, nz, d)` tuple written to scene files.
    pub fn to_array(&self) -> [f64; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }

    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<[f64; 4]> for Plane {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}
