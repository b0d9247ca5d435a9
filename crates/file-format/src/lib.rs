pub mod errors;
pub mod model;
pub mod object;
pub mod pigment;
pub mod save;
pub mod scene;

pub use errors::SaveError;
pub use model::{Camera, Color, Light, SurfaceFinish};
pub use object::{ObjectKind, Polyhedron, SceneObject, Sphere};
pub use pigment::Pigment;
pub use save::{save_scene, scene_to_string, write_scene};
pub use scene::{ReferenceKind, Scene, SceneSummary, UnresolvedReference};
