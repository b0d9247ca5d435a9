//! Flat value records: camera, lights, colors and surface finishes.

use scene_kernel::{Point3d, Vec3};
use serde::{Deserialize, Serialize};

/// An RGB color with components nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self::new(r, g, b)
    }
}

/// The single viewpoint of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Point3d,
    /// Point the camera looks at.
    pub target: Point3d,
    /// Up direction.
    pub up: Vec3,
    /// Field of view in degrees.
    pub fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3d::new(0.0, 30.0, -200.0),
            target: Point3d::new(0.0, 10.0, -100.0),
            up: Vec3::Y,
            fov: 40.0,
        }
    }
}

impl Camera {
    /// Camera looking from `position` at `target` with +Y up.
    pub fn looking_at(position: Point3d, target: Point3d, fov: f64) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov,
        }
    }
}

/// A point light with constant/linear/quadratic attenuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Point3d,
    pub color: Color,
    /// `(rho0, rho1, rho2)` attenuation coefficients.
    pub attenuation: [f64; 3],
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Point3d::ORIGIN,
            color: Color::WHITE,
            attenuation: [1.0, 0.0, 0.0],
        }
    }
}

impl Light {
    /// White light at `position` with default attenuation.
    pub fn at(position: Point3d) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_attenuation(mut self, attenuation: [f64; 3]) -> Self {
        self.attenuation = attenuation;
        self
    }
}

/// Reflectance and transmittance coefficients used by the shader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFinish {
    /// Ambient coefficient.
    pub ka: f64,
    /// Diffuse coefficient.
    pub kd: f64,
    /// Specular coefficient.
    pub ks: f64,
    /// Specular exponent.
    pub alpha: f64,
    /// Reflectivity.
    pub kr: f64,
    /// Transmissivity.
    pub kt: f64,
    /// Index of refraction.
    pub ior: f64,
}

impl Default for SurfaceFinish {
    fn default() -> Self {
        Self {
            ka: 0.3,
            kd: 0.4,
            ks: 0.0,
            alpha: 1.0,
            kr: 0.0,
            kt: 0.0,
            ior: 0.0,
        }
    }
}

impl SurfaceFinish {
    /// Opaque, non-reflective Phong finish.
    pub fn phong(ka: f64, kd: f64, ks: f64, alpha: f64) -> Self {
        Self {
            ka,
            kd,
            ks,
            alpha,
            ..Self::default()
        }
    }

    pub fn with_reflectivity(mut self, kr: f64) -> Self {
        self.kr = kr;
        self
    }

    pub fn with_transmission(mut self, kt: f64, ior: f64) -> Self {
        self.kt = kt;
        self.ior = ior;
        self
    }
}
