use serde::{Deserialize, Serialize};

use crate::model::Color;

/// Edge length of a checker cell when none is given.
pub const DEFAULT_CHECKER_SIZE: f64 = 40.0;
/// Texture file used when a texmap pigment names none.
pub const DEFAULT_TEXTURE: &str = "texture.ppm";
/// Default texture-coordinate projection rows.
pub const DEFAULT_TEXMAP_P0: [f64; 4] = [0.0, 0.001, 0.0, 0.12];
pub const DEFAULT_TEXMAP_P1: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

/// A surface color source, referenced from objects by its index in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pigment {
    Solid {
        color: Color,
    },
    Checker {
        color1: Color,
        color2: Color,
        size: f64,
    },
    /// Image texture; `p0`/`p1` map a surface point to texture coordinates.
    Texmap {
        filename: String,
        p0: [f64; 4],
        p1: [f64; 4],
    },
}

impl Default for Pigment {
    fn default() -> Self {
        Pigment::Solid {
            color: Color::WHITE,
        }
    }
}

impl Pigment {
    pub fn solid(color: impl Into<Color>) -> Self {
        Pigment::Solid {
            color: color.into(),
        }
    }

    pub fn checker(color1: impl Into<Color>, color2: impl Into<Color>, size: f64) -> Self {
        Pigment::Checker {
            color1: color1.into(),
            color2: color2.into(),
            size,
        }
    }

    /// Black and white checker with the default cell size.
    pub fn default_checker() -> Self {
        Self::checker(Color::BLACK, Color::WHITE, DEFAULT_CHECKER_SIZE)
    }

    /// Texture map with the default projection.
    pub fn texmap(filename: impl Into<String>) -> Self {
        Self::texmap_with(filename, DEFAULT_TEXMAP_P0, DEFAULT_TEXMAP_P1)
    }

    pub fn texmap_with(filename: impl Into<String>, p0: [f64; 4], p1: [f64; 4]) -> Self {
        Pigment::Texmap {
            filename: filename.into(),
            p0,
            p1,
        }
    }

    /// The keyword the renderer dispatches on.
    pub fn tag(&self) -> &'static str {
        match self {
            Pigment::Solid { .. } => "solid",
            Pigment::Checker { .. } => "checker",
            Pigment::Texmap { .. } => "texmap",
        }
    }
}
