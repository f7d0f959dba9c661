//! Picker settings (swatch.yaml).
//!
//! Settings say whether custom colours are kept, where the custom palette
//! file lives, and which image to use as the base colour wheel.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::render::WheelSource;
use crate::types::Palette;

/// Name of the settings file looked up by [`Settings::discover`].
pub const SETTINGS_FILE: &str = "swatch.yaml";

/// Picker settings loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether custom colours are offered and persisted.
    pub custom_palette: bool,

    /// Directory holding the custom palette file.
    pub palette_dir: PathBuf,

    /// File name of the custom palette inside `palette_dir`.
    pub palette_file: String,

    /// Base wheel image. The built-in gradient is used when unset.
    pub wheel: Option<PathBuf>,

    /// Edge length of the built-in wheel gradient.
    pub wheel_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            custom_palette: true,
            palette_dir: PathBuf::from("."),
            palette_file: "custom-palette.xml".to_string(),
            wheel: None,
            wheel_size: 256,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", SETTINGS_FILE)),
        })
    }

    /// Load `swatch.yaml` from `dir`, or defaults if there is none.
    ///
    /// Relative paths in the file are resolved against `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default().relative_to(dir));
        }
        Ok(Self::load(&path)?.relative_to(dir))
    }

    /// Resolve relative paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.palette_dir.is_relative() {
            self.palette_dir = base.join(&self.palette_dir);
        }
        if let Some(wheel) = self.wheel.take() {
            self.wheel = Some(if wheel.is_relative() {
                base.join(wheel)
            } else {
                wheel
            });
        }
        self
    }

    /// Full path of the custom palette file.
    pub fn palette_path(&self) -> PathBuf {
        self.palette_dir.join(&self.palette_file)
    }

    /// The palette these settings describe.
    ///
    /// With custom colours disabled nothing is read or written.
    pub fn open_palette(&self) -> Palette {
        if self.custom_palette {
            Palette::load(self.palette_path())
        } else {
            Palette::new()
        }
    }

    /// Where the base wheel image comes from.
    pub fn wheel_source(&self) -> WheelSource {
        match &self.wheel {
            Some(path) => WheelSource::File(path.clone()),
            None => WheelSource::Generated {
                width: self.wheel_size,
                height: self.wheel_size,
            },
        }
    }
}
