use scene_kernel::solids::{make_box, make_cube, make_prism, make_pyramid};
use scene_kernel::{Plane, Point3d, SolidShape};
use serde::{Deserialize, Serialize};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point3d,
    pub radius: f64,
    /// Index into the scene's pigments. Not checked.
    pub pigment_id: usize,
    /// Index into the scene's finishes. Not checked.
    pub finish_id: usize,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Point3d::ORIGIN,
            radius: 10.0,
            pigment_id: 0,
            finish_id: 0,
        }
    }
}

impl Sphere {
    pub fn new(center: impl Into<Point3d>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
            ..Self::default()
        }
    }

    pub fn with_material(mut self, pigment_id: usize, finish_id: usize) -> Self {
        self.pigment_id = pigment_id;
        self.finish_id = finish_id;
        self
    }
}

/// A convex solid given as the intersection of half-spaces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyhedron {
    /// Bounding planes in insertion order.
    pub planes: Vec<Plane>,
    pub pigment_id: usize,
    pub finish_id: usize,
}

impl Polyhedron {
    pub fn new(planes: Vec<Plane>) -> Self {
        Self {
            planes,
            pigment_id: 0,
            finish_id: 0,
        }
    }

    pub fn from_shape(shape: &SolidShape) -> Self {
        Self::new(shape.planes())
    }

    pub fn cube(center: impl Into<Point3d>, size: f64) -> Self {
        Self::new(make_cube(center.into(), size))
    }

    pub fn rectangular_box(center: impl Into<Point3d>, width: f64, height: f64, depth: f64) -> Self {
        Self::new(make_box(center.into(), width, height, depth))
    }

    pub fn prism(center: impl Into<Point3d>, radius: f64, height: f64, sides: usize) -> Self {
        Self::new(make_prism(center.into(), radius, height, sides))
    }

    pub fn pyramid(base_center: impl Into<Point3d>, radius: f64, height: f64, sides: usize) -> Self {
        Self::new(make_pyramid(base_center.into(), radius, height, sides))
    }

    pub fn with_material(mut self, pigment_id: usize, finish_id: usize) -> Self {
        self.pigment_id = pigment_id;
        self.finish_id = finish_id;
        self
    }

    pub fn face_count(&self) -> usize {
        self.planes.len()
    }
}

/// The renderable objects a scene can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneObject {
    Sphere(Sphere),
    Polyhedron(Polyhedron),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Sphere,
    Polyhedron,
}

impl SceneObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            SceneObject::Sphere(_) => ObjectKind::Sphere,
            SceneObject::Polyhedron(_) => ObjectKind::Polyhedron,
        }
    }

    pub fn pigment_id(&self) -> usize {
        match self {
            SceneObject::Sphere(s) => s.pigment_id,
            SceneObject::Polyhedron(p) => p.pigment_id,
        }
    }

    pub fn finish_id(&self) -> usize {
        match self {
            SceneObject::Sphere(s) => s.finish_id,
            SceneObject::Polyhedron(p) => p.finish_id,
        }
    }
}

impl From<Sphere> for SceneObject {
    fn from(s: Sphere) -> Self {
        SceneObject::Sphere(s)
    }
}

impl From<Polyhedron> for SceneObject {
    fn from(p: Polyhedron) -> Self {
        SceneObject::Polyhedron(p)
    }
}
