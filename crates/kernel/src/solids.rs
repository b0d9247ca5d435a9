//! Half-space generators for the convex solid families the renderer supports.
//!
//! Every generator is a pure function from shape parameters to an ordered
//! plane list. Parameters are not validated: zero or negative extents and
//! fewer than three sides produce a degenerate plane set rather than an
//! error. Use [`crate::validation::SolidValidator`] to check input up front.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::{debug, info, instrument};

use crate::geometry::plane::Plane;
use crate::geometry::point::Point3d;
use crate::geometry::vector::Vec3;

/// Build an axis-aligned cube with edge length `size`, centered on `center`.
#[instrument]
pub fn make_cube(center: Point3d, size: f64) -> Vec<Plane> {
    make_box(center, size, size, size)
}

/// Build an axis-aligned box with independent full extents along X, Y and Z.
///
/// Planes come out in the order top, bottom, right, left, front, back.
#[instrument]
pub fn make_box(center: Point3d, width: f64, height: f64, depth: f64) -> Vec<Plane> {
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        debug!("non-positive extent; box will be empty or inverted");
    }
    let (w, h, d) = (width / 2.0, height / 2.0, depth / 2.0);
    let Point3d { x: cx, y: cy, z: cz } = center;

    let planes = vec![
        Plane::new(0.0, 1.0, 0.0, -(cy + h)),  // top
        Plane::new(0.0, -1.0, 0.0, cy - h),    // bottom
        Plane::new(1.0, 0.0, 0.0, -(cx + w)),  // right
        Plane::new(-1.0, 0.0, 0.0, cx - w),    // left
        Plane::new(0.0, 0.0, 1.0, -(cz + d)),  // front
        Plane::new(0.0, 0.0, -1.0, cz - d),    // back
    ];
    info!(plane_count = planes.len(), "created box");
    planes
}

/// Build a right prism whose cross-section is a regular `sides`-gon in the XZ plane.
///
/// Side plane `i` has outward normal at angle `2πi/sides` and lies `radius`
/// from the axis, so `radius` is the polygon's apothem. `height` is split
/// evenly above and below `center.y`.
#[instrument]
pub fn make_prism(center: Point3d, radius: f64, height: f64, sides: usize) -> Vec<Plane> {
    if sides < 3 {
        debug!(sides, "fewer than three sides; prism is unbounded");
    }
    let h = height / 2.0;
    let cy = center.y;

    let mut planes = Vec::with_capacity(sides + 2);
    planes.push(Plane::new(0.0, 1.0, 0.0, -(cy + h)));
    planes.push(Plane::new(0.0, -1.0, 0.0, cy - h));

    for i in 0..sides {
        let angle = polygon_angle(i, sides);
        let n = Vec3::from_xz_angle(angle);
        // Tangent to the circle of `radius` at this angle.
        let t = center.on_xz_circle(radius, angle);
        let d = -(n.x * t.x + n.z * t.z);
        planes.push(Plane::new(n.x, 0.0, n.z, d));
    }

    info!(plane_count = planes.len(), base = %polygon_name(sides), "created prism");
    planes
}

/// Build a pyramid with a regular `sides`-gon base at `base_center.y` and its
/// apex `height` above the base center.
///
/// Each face normal is `(v2 - v1) × (apex - v1)` for consecutive base
/// vertices `v1`, `v2`, normalized unless the face has zero area.
#[instrument]
pub fn make_pyramid(base_center: Point3d, radius: f64, height: f64, sides: usize) -> Vec<Plane> {
    if sides < 3 {
        debug!(sides, "fewer than three sides; pyramid is unbounded");
    }
    let cy = base_center.y;

    let mut planes = Vec::with_capacity(sides + 1);
    planes.push(Plane::new(0.0, -1.0, 0.0, cy));

    for i in 0..sides {
        let v1 = base_center.on_xz_circle(radius, polygon_angle(i, sides));
        let v2 = base_center.on_xz_circle(radius, polygon_angle(i + 1, sides));

        let along_base = v2 - v1;
        let to_apex = Vec3::new(base_center.x - v1.x, height, base_center.z - v1.z);
        let raw = along_base.cross(&to_apex);
        let n = match raw.normalized() {
            Some(unit) => unit,
            None => {
                debug!(face = i, "zero-area pyramid face; normal left unnormalized");
                raw
            }
        };

        planes.push(Plane::through_point(n, &v1));
    }

    info!(plane_count = planes.len(), base = %polygon_name(sides), "created pyramid");
    planes
}

/// Angle of vertex `i` of a regular polygon with `sides` vertices.
fn polygon_angle(i: usize, sides: usize) -> f64 {
    2.0 * PI * (i as f64) / (sides as f64)
}

/// Adjective for a regular polygon base, e.g. "hexagonal" or "7-sided".
pub fn polygon_name(sides: usize) -> String {
    match sides {
        3 => "triangular".to_string(),
        4 => "square".to_string(),
        5 => "pentagonal".to_string(),
        6 => "hexagonal".to_string(),
        8 => "octagonal".to_string(),
        n => format!("{n}-sided"),
    }
}

// ── Parameter records ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    pub center: Point3d,
    pub size: f64,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            center: Point3d::ORIGIN,
            size: 10.0,
        }
    }
}

impl CubeParams {
    pub fn planes(&self) -> Vec<Plane> {
        make_cube(self.center, self.size)
    }
}

/// Full extents of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxParams {
    pub center: Point3d,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            center: Point3d::ORIGIN,
            width: 10.0,
            height: 10.0,
            depth: 10.0,
        }
    }
}

impl BoxParams {
    pub fn planes(&self) -> Vec<Plane> {
        make_box(self.center, self.width, self.height, self.depth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrismParams {
    pub center: Point3d,
    /// Axis-to-side-face distance.
    pub radius: f64,
    pub height: f64,
    pub sides: usize,
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            center: Point3d::ORIGIN,
            radius: 10.0,
            height: 10.0,
            sides: 4,
        }
    }
}

impl PrismParams {
    pub fn planes(&self) -> Vec<Plane> {
        make_prism(self.center, self.radius, self.height, self.sides)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PyramidParams {
    pub base_center: Point3d,
    /// Center-to-vertex distance of the base polygon.
    pub radius: f64,
    /// Apex offset above the base.
    pub height: f64,
    pub sides: usize,
}

impl Default for PyramidParams {
    fn default() -> Self {
        Self {
            base_center: Point3d::ORIGIN,
            radius: 10.0,
            height: 10.0,
            sides: 4,
        }
    }
}

impl PyramidParams {
    pub fn planes(&self) -> Vec<Plane> {
        make_pyramid(self.base_center, self.radius, self.height, self.sides)
    }
}

/// A solid family together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolidShape {
    Cube(CubeParams),
    Box(BoxParams),
    Prism(PrismParams),
    Pyramid(PyramidParams),
}

impl SolidShape {
    /// Generate the bounding planes for this shape.
    pub fn planes(&self) -> Vec<Plane> {
        match self {
            SolidShape::Cube(p) => p.planes(),
            SolidShape::Box(p) => p.planes(),
            SolidShape::Prism(p) => p.planes(),
            SolidShape::Pyramid(p) => p.planes(),
        }
    }

    /// Number of planes [`SolidShape::planes`] produces.
    pub fn plane_count(&self) -> usize {
        match self {
            SolidShape::Cube(_) | SolidShape::Box(_) => 6,
            SolidShape::Prism(p) => p.sides + 2,
            SolidShape::Pyramid(p) => p.sides + 1,
        }
    }

    /// A point that lies strictly inside the intended solid for valid parameters.
    ///
    /// For pyramids this is the centroid, a quarter of the height above the base.
    pub fn reference_point(&self) -> Point3d {
        match self {
            SolidShape::Cube(p) => p.center,
            SolidShape::Box(p) => p.center,
            SolidShape::Prism(p) => p.center,
            SolidShape::Pyramid(p) => p.base_center + Vec3::new(0.0, p.height / 4.0, 0.0),
        }
    }

    pub fn family(&self) -> &'static str {
        match self {
            SolidShape::Cube(_) => "cube",
            SolidShape::Box(_) => "box",
            SolidShape::Prism(_) => "prism",
            SolidShape::Pyramid(_) => "pyramid",
        }
    }
}

impl From<CubeParams> for SolidShape {
    fn from(p: CubeParams) -> Self {
        SolidShape::Cube(p)
    }
}

impl From<BoxParams> for SolidShape {
    fn from(p: BoxParams) -> Self {
        SolidShape::Box(p)
    }
}

impl From<PrismParams> for SolidShape {
    fn from(p: PrismParams) -> Self {
        SolidShape::Prism(p)
    }
}

impl From<PyramidParams> for SolidShape {
    fn from(p: PyramidParams) -> Self {
        SolidShape::Pyramid(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_plane(p: &Plane, expected: [f64; 4]) {
        let actual = p.to_array();
        for k in 0..4 {
            assert_abs_diff_eq!(actual[k], expected[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cube_at_origin() {
        let planes = make_cube(Point3d::ORIGIN, 10.0);
        assert_eq!(planes.len(), 6);
        assert_plane(&planes[0], [0.0, 1.0, 0.0, -5.0]);
        assert_plane(&planes[1], [0.0, -1.0, 0.0, -5.0]);
        assert_plane(&planes[2], [1.0, 0.0, 0.0, -5.0]);
        assert_plane(&planes[3], [-1.0, 0.0, 0.0, -5.0]);
        assert_plane(&planes[4], [0.0, 0.0, 1.0, -5.0]);
        assert_plane(&planes[5], [0.0, 0.0, -1.0, -5.0]);
    }

    #[test]
    fn test_box_offset_center() {
        let planes = make_box(Point3d::new(0.0, -2.0, 0.0), 80.0, 2.0, 40.0);
        assert_plane(&planes[0], [0.0, 1.0, 0.0, 1.0]);
        assert_plane(&planes[1], [0.0, -1.0, 0.0, -3.0]);
        assert_plane(&planes[2], [1.0, 0.0, 0.0, -40.0]);
        assert_plane(&planes[3], [-1.0, 0.0, 0.0, -40.0]);
        assert_plane(&planes[4], [0.0, 0.0, 1.0, -20.0]);
        assert_plane(&planes[5], [0.0, 0.0, -1.0, -20.0]);
        // Faces sit at center ± extent/2: y ∈ [-3, -1].
        assert!(planes[0].signed_distance(&Point3d::new(0.0, -1.0, 0.0)).abs() < 1e-12);
        assert!(planes[1].signed_distance(&Point3d::new(0.0, -3.0, 0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_size_box_is_degenerate_not_rejected() {
        let planes = make_cube(Point3d::new(1.0, 2.0, 3.0), 0.0);
        assert_eq!(planes.len(), 6);
        // The center lies on every plane instead of strictly inside.
        for p in &planes {
            assert_abs_diff_eq!(p.signed_distance(&Point3d::new(1.0, 2.0, 3.0)), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_size_box_is_inverted() {
        let planes = make_cube(Point3d::ORIGIN, -4.0);
        for p in &planes {
            assert!(p.signed_distance(&Point3d::ORIGIN) > 0.0);
        }
    }

    #[test]
    fn test_square_prism_first_side() {
        let planes = make_prism(Point3d::ORIGIN, 10.0, 10.0, 4);
        assert_eq!(planes.len(), 6);
        assert_plane(&planes[0], [0.0, 1.0, 0.0, -5.0]);
        assert_plane(&planes[1], [0.0, -1.0, 0.0, -5.0]);
        assert_plane(&planes[2], [1.0, 0.0, 0.0, -10.0]);
        assert_plane(&planes[3], [0.0, 0.0, 1.0, -10.0]);
        assert_plane(&planes[4], [-1.0, 0.0, 0.0, -10.0]);
        assert_plane(&planes[5], [0.0, 0.0, -1.0, -10.0]);
    }

    #[test]
    fn test_prism_sides_tangent_to_radius() {
        let center = Point3d::new(-45.0, 15.0, 20.0);
        let planes = make_prism(center, 12.0, 25.0, 6);
        for p in &planes[2..] {
            assert_eq!(p.normal.y, 0.0);
            assert_abs_diff_eq!(p.normal.length(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(p.signed_distance(&center), -12.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_prism_with_too_few_sides_has_only_caps() {
        assert_eq!(make_prism(Point3d::ORIGIN, 10.0, 10.0, 0).len(), 2);
        assert_eq!(make_prism(Point3d::ORIGIN, 10.0, 10.0, 2).len(), 4);
    }

    #[test]
    fn test_pyramid_counts_and_base() {
        let planes = make_pyramid(Point3d::new(0.0, 30.0, 0.0), 55.0, 25.0, 4);
        assert_eq!(planes.len(), 5);
        assert_plane(&planes[0], [0.0, -1.0, 0.0, 30.0]);
        assert_eq!(make_pyramid(Point3d::ORIGIN, 10.0, 10.0, 1).len(), 2);
    }

    #[test]
    fn test_pyramid_faces_contain_their_base_edge_and_apex() {
        let base = Point3d::new(15.0, 0.0, 0.0);
        let (radius, height, sides) = (15.0, 30.0, 5);
        let planes = make_pyramid(base, radius, height, sides);
        let apex = base + Vec3::new(0.0, height, 0.0);

        for (i, p) in planes[1..].iter().enumerate() {
            assert_abs_diff_eq!(p.normal.length(), 1.0, epsilon = 1e-12);
            let v1 = base.on_xz_circle(radius, polygon_angle(i, sides));
            let v2 = base + Vec3::from_xz_angle(polygon_angle(i + 1, sides)) * radius;
            assert_abs_diff_eq!(p.signed_distance(&v1), 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(p.signed_distance(&v2), 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(p.signed_distance(&apex), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_pyramid_face_winding_points_toward_axis() {
        // Increasing-angle winding with x = cos, z = sin gives faces whose
        // normals point toward the axis: the first face of a unit square
        // pyramid is (-1, -1, -1)/√3.
        let planes = make_pyramid(Point3d::ORIGIN, 1.0, 1.0, 4);
        let k = 1.0 / 3.0_f64.sqrt();
        assert_plane(&planes[1], [-k, -k, -k, k]);
    }

    #[test]
    fn test_flat_pyramid_keeps_unnormalized_normal() {
        let planes = make_pyramid(Point3d::ORIGIN, 0.0, 0.0, 3);
        for p in &planes[1..] {
            assert!(p.is_finite());
            assert_eq!(p.normal.length(), 0.0);
        }
    }

    #[test]
    fn test_shape_dispatch() {
        let shapes: [SolidShape; 4] = [
            CubeParams::default().into(),
            BoxParams::default().into(),
            PrismParams { sides: 7, ..Default::default() }.into(),
            PyramidParams { sides: 5, ..Default::default() }.into(),
        ];
        for shape in &shapes {
            assert_eq!(shape.planes().len(), shape.plane_count(), "{}", shape.family());
        }
        assert_eq!(shapes[2].plane_count(), 9);
        assert_eq!(shapes[3].plane_count(), 6);
    }

    #[test]
    fn test_pyramid_reference_point_is_centroid() {
        let shape = SolidShape::Pyramid(PyramidParams {
            base_center: Point3d::new(1.0, 2.0, 3.0),
            height: 8.0,
            ..Default::default()
        });
        assert_eq!(shape.reference_point(), Point3d::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn test_polygon_names() {
        assert_eq!(polygon_name(3), "triangular");
        assert_eq!(polygon_name(8), "octagonal");
        assert_eq!(polygon_name(7), "7-sided");
    }
}
