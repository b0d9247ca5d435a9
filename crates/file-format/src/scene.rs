use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Camera, Light, SurfaceFinish};
use crate::object::SceneObject;
use crate::pigment::Pigment;

/// Everything written to one scene file.
///
/// Objects refer to pigments and finishes by position in `pigments` and
/// `finishes`. Those references are not checked when objects are added or
/// when the scene is saved; see [`Scene::unresolved_references`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub pigments: Vec<Pigment>,
    pub finishes: Vec<SurfaceFinish>,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Empty scene with the default camera.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_camera(camera: Camera) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Append a pigment and return its index for use in objects.
    pub fn add_pigment(&mut self, pigment: Pigment) -> usize {
        self.pigments.push(pigment);
        self.pigments.len() - 1
    }

    /// Append a finish and return its index for use in objects.
    pub fn add_finish(&mut self, finish: SurfaceFinish) -> usize {
        self.finishes.push(finish);
        self.finishes.len() - 1
    }

    pub fn add_object(&mut self, object: impl Into<SceneObject>) {
        self.objects.push(object.into());
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            lights: self.lights.len(),
            pigments: self.pigments.len(),
            finishes: self.finishes.len(),
            objects: self.objects.len(),
        }
    }

    /// Objects whose pigment or finish index has no matching entry.
    ///
    /// Saving does not call this; whether such a scene is an error is up to
    /// the caller.
    pub fn unresolved_references(&self) -> Vec<UnresolvedReference> {
        let mut missing = Vec::new();
        for (object_index, obj) in self.objects.iter().enumerate() {
            if obj.pigment_id() >= self.pigments.len() {
                missing.push(UnresolvedReference {
                    object_index,
                    kind: ReferenceKind::Pigment,
                    index: obj.pigment_id(),
                    available: self.pigments.len(),
                });
            }
            if obj.finish_id() >= self.finishes.len() {
                missing.push(UnresolvedReference {
                    object_index,
                    kind: ReferenceKind::Finish,
                    index: obj.finish_id(),
                    available: self.finishes.len(),
                });
            }
        }
        missing
    }
}

/// Entity counts of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneSummary {
    pub lights: usize,
    pub pigments: usize,
    pub finishes: usize,
    pub objects: usize,
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lights: {}, Pigments: {}, Finishes: {}, Objects: {}",
            self.lights, self.pigments, self.finishes, self.objects
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Pigment,
    Finish,
}

/// An object's pigment or finish index that points past the end of its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub object_index: usize,
    pub kind: ReferenceKind,
    pub index: usize,
    /// Length of the table the index was looked up in.
    pub available: usize,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "object {} references {:?} {} but only {} defined",
            self.object_index, self.kind, self.index, self.available
        )
    }
}
