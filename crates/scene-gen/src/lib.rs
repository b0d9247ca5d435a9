//! Preset raytracer scenes and batch writing of scene files.

pub mod presets;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use scene_format::{save_scene, SaveError, Scene};
use tracing::{info, instrument};

/// Directory the batch writer targets when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "data/scenes";

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("unknown preset '{0}' (expected one of gallery, solar, chess, temple, crystals, city)")]
    UnknownPreset(String),
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// The canned scenes, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Gallery,
    Solar,
    Chess,
    Temple,
    Crystals,
    City,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Gallery,
        Preset::Solar,
        Preset::Chess,
        Preset::Temple,
        Preset::Crystals,
        Preset::City,
    ];

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Gallery => "gallery",
            Preset::Solar => "solar",
            Preset::Chess => "chess",
            Preset::Temple => "temple",
            Preset::Crystals => "crystals",
            Preset::City => "city",
        }
    }

    /// File name the preset is written under.
    pub fn file_name(self) -> &'static str {
        match self {
            Preset::Gallery => "scene_gallery.txt",
            Preset::Solar => "scene_solar_system.txt",
            Preset::Chess => "scene_chess.txt",
            Preset::Temple => "scene_temple.txt",
            Preset::Crystals => "scene_crystals.txt",
            Preset::City => "scene_cityscape.txt",
        }
    }

    pub fn build(self) -> Scene {
        match self {
            Preset::Gallery => presets::gallery(),
            Preset::Solar => presets::solar_system(),
            Preset::Chess => presets::chess(),
            Preset::Temple => presets::temple(),
            Preset::Crystals => presets::crystal_garden(),
            Preset::City => presets::cityscape(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| GenError::UnknownPreset(s.to_string()))
    }
}

/// Build each preset and save it into `dir`, creating the directory if
/// needed. Returns the written paths in order. Stops at the first failure.
#[instrument(skip(dir, presets), fields(dir = %dir.as_ref().display(), count = presets.len()))]
pub fn write_presets(dir: impl AsRef<Path>, presets: &[Preset]) -> Result<Vec<PathBuf>, GenError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| GenError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(presets.len());
    for &preset in presets {
        let path = dir.join(preset.file_name());
        let scene = preset.build();
        save_scene(&scene, &path)?;
        info!(preset = %preset, summary = %scene.summary(), "wrote preset");
        written.push(path);
    }
    Ok(written)
}
