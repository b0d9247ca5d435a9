//! Text encoding of scenes for the raytracer.
//!
//! A scene file has five sections in fixed order: camera, lights, pigments,
//! finishes, objects. Every section after the camera starts with a count
//! line taken from the length of the list being written. Field separators
//! are a mix of spaces and tabs that the renderer's reader depends on, so
//! each record's layout is reproduced exactly.
//!
//! Floats use Rust's shortest round-trip `Display` (`1.0` → `1`), except
//! the ambient/diffuse/specular coefficients (two decimals) and the
//! reflectivity (one decimal).

use std::fmt;
use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::errors::SaveError;
use crate::model::{Camera, Color, Light, SurfaceFinish};
use crate::object::{Polyhedron, SceneObject, Sphere};
use crate::pigment::Pigment;
use crate::scene::Scene;

/// Render the whole scene file as a string.
pub fn scene_to_string(scene: &Scene) -> String {
    scene.to_string()
}

/// Write the encoded scene to `writer` in a single write.
#[instrument(skip_all)]
pub fn write_scene<W: Write>(scene: &Scene, writer: &mut W) -> Result<(), SaveError> {
    let text = scene.to_string();
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Encode the scene and write it to `path`, replacing any existing file.
///
/// The text is fully rendered before the file is opened, so an encoding
/// problem can never leave a truncated file behind. Parent directories are
/// not created.
#[instrument(skip(scene, path), fields(file = %path.as_ref().display()))]
pub fn save_scene(scene: &Scene, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let text = scene.to_string();
    std::fs::write(path, &text).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let summary = scene.summary();
    info!(
        lights = summary.lights,
        pigments = summary.pigments,
        finishes = summary.finishes,
        objects = summary.objects,
        bytes = text.len(),
        "scene saved"
    );
    Ok(())
}

/// Count line followed by every record, so the two cannot disagree.
fn write_section<T: fmt::Display>(f: &mut fmt::Formatter<'_>, records: &[T]) -> fmt::Result {
    writeln!(f, "{}", records.len())?;
    for record in records {
        write!(f, "{record}")?;
    }
    Ok(())
}

fn write_color(f: &mut fmt::Formatter<'_>, c: &Color) -> fmt::Result {
    write!(f, "{} {} {}", c.r, c.g, c.b)
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.camera)?;
        write_section(f, &self.lights)?;
        write_section(f, &self.pigments)?;
        write_section(f, &self.finishes)?;
        write_section(f, &self.objects)
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, t, n) = (self.position, self.target, self.up);
        writeln!(f, "{} {} {}", p.x, p.y, p.z)?;
        writeln!(f, "{} {} {}", t.x, t.y, t.z)?;
        writeln!(f, "{} {} {}", n.x, n.y, n.z)?;
        writeln!(f, "{}", self.fov)
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.position;
        let [a0, a1, a2] = self.attenuation;
        write!(f, "{} {} {}\t", p.x, p.y, p.z)?;
        write_color(f, &self.color)?;
        writeln!(f, "\t{a0} {a1} {a2}")
    }
}

impl fmt::Display for Pigment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pigment::Solid { color } => {
                write!(f, "solid\t")?;
                write_color(f, color)?;
                writeln!(f)
            }
            Pigment::Checker {
                color1,
                color2,
                size,
            } => {
                write!(f, "checker\t")?;
                write_color(f, color1)?;
                write!(f, "\t\t")?;
                write_color(f, color2)?;
                writeln!(f, "\t\t{size} ")
            }
            Pigment::Texmap { filename, p0, p1 } => {
                writeln!(f, "texmap\t{filename}")?;
                writeln!(f, "{} {} {} {}", p0[0], p0[1], p0[2], p0[3])?;
                writeln!(f, "{} {} {} {}", p1[0], p1[1], p1[2], p1[3])
            }
        }
    }
}

impl fmt::Display for SurfaceFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:.2} {:.2} {:.2}\t{}\t{:.1} {} {}",
            self.ka, self.kd, self.ks, self.alpha, self.kr, self.kt, self.ior
        )
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.center;
        writeln!(
            f,
            "{} {} sphere\t\t{}\t{}\t{}\t\t{} ",
            self.pigment_id, self.finish_id, c.x, c.y, c.z, self.radius
        )
    }
}

impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} polyhedron {}",
            self.pigment_id,
            self.finish_id,
            self.planes.len()
        )?;
        for plane in &self.planes {
            let [nx, ny, nz, d] = plane.to_array();
            writeln!(f, "{nx}\t{ny}\t{nz}\t{d}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneObject::Sphere(s) => write!(f, "{s}"),
            SceneObject::Polyhedron(p) => write!(f, "{p}"),
        }
    }
}
