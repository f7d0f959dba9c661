//! Palette of built-in and custom swatches.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SwatchError};
use crate::parser::{parse_palette_file, write_palette_file};

use super::hsla::hsla_to_rgba;
use super::Colour;

/// Number of built-in colours shown in the primary swatch.
pub const PRIMARY_SWATCH_LEN: usize = 39;

/// Number of built-in colours shown in the secondary swatch.
pub const SECONDARY_SWATCH_LEN: usize = 112;

/// A selectable colour with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub colour: Colour,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Swatch {
    pub fn new(colour: Colour) -> Self {
        Self { colour, name: None }
    }

    pub fn named(colour: Colour, name: impl Into<String>) -> Self {
        Self {
            colour,
            name: Some(name.into()),
        }
    }
}

impl From<Colour> for Swatch {
    fn from(colour: Colour) -> Self {
        Self::new(colour)
    }
}

/// Built-in swatches plus the user's custom colours.
///
/// When the palette has a path, every edit to the custom list is written
/// back to that file straight away. Write failures are logged and the
/// in-memory list is kept.
#[derive(Debug, Clone)]
pub struct Palette {
    builtin: Vec<Swatch>,
    custom: Vec<Swatch>,
    path: Option<PathBuf>,
}

impl Palette {
    /// Palette with the built-in swatches and no custom colours.
    pub fn new() -> Self {
        Self {
            builtin: builtin_swatches(),
            custom: Vec::new(),
            path: None,
        }
    }

    /// Palette persisted at `path`, without reading it.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new()
        }
    }

    /// Load custom colours from `path`, falling back to an empty list.
    ///
    /// A missing or malformed file is not an error; the palette keeps the
    /// path so later edits recreate the file.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut palette = Self::with_path(path);
        palette.reload();
        palette
    }

    /// Load custom colours from `path`, reporting any failure.
    pub fn try_load(path: impl Into<PathBuf>) -> Result<Self> {
        let mut palette = Self::with_path(path);
        let path = palette.path.clone().unwrap_or_default();
        palette.custom = read_custom(&path)?;
        Ok(palette)
    }

    /// Re-read the custom colours from the palette's file.
    ///
    /// On failure the list is left empty if the file is missing and
    /// unchanged if it exists but cannot be read or parsed.
    pub fn reload(&mut self) {
        let Some(path) = self.path.clone() else {
            return;
        };

        if !path.exists() {
            debug!(path = %path.display(), "no custom palette file, starting empty");
            self.custom.clear();
            return;
        }

        match read_custom(&path) {
            Ok(custom) => {
                debug!(path = %path.display(), count = custom.len(), "loaded custom palette");
                self.custom = custom;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable custom palette");
            }
        }
    }

    /// Write the custom colours to the palette's file.
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => self.save_to(path),
            None => Err(SwatchError::Io {
                path: PathBuf::new(),
                message: "Palette has no file path".to_string(),
            }),
        }
    }

    /// Write the custom colours to `path`, overwriting it.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| SwatchError::Io {
                path: dir.to_path_buf(),
                message: format!("Failed to create palette directory: {}", e),
            })?;
        }

        fs::write(path, write_palette_file(&self.custom)).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write palette: {}", e),
        })?;

        debug!(path = %path.display(), count = self.custom.len(), "saved custom palette");
        Ok(())
    }

    /// File the custom colours persist to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All built-in swatches.
    pub fn builtin(&self) -> &[Swatch] {
        &self.builtin
    }

    /// The first block of built-in swatches.
    pub fn primary_swatch(&self) -> &[Swatch] {
        let end = PRIMARY_SWATCH_LEN.min(self.builtin.len());
        &self.builtin[..end]
    }

    /// The block of built-in swatches following the primary one.
    pub fn secondary_swatch(&self) -> &[Swatch] {
        let start = PRIMARY_SWATCH_LEN.min(self.builtin.len());
        let end = (PRIMARY_SWATCH_LEN + SECONDARY_SWATCH_LEN).min(self.builtin.len());
        &self.builtin[start..end]
    }

    /// The user's custom colours.
    pub fn custom(&self) -> &[Swatch] {
        &self.custom
    }

    /// Append a custom colour.
    pub fn add_custom(&mut self, swatch: impl Into<Swatch>) {
        self.custom.push(swatch.into());
        self.persist();
    }

    /// Remove the custom colour at `index`, returning it.
    pub fn remove_custom(&mut self, index: usize) -> Option<Swatch> {
        if index >= self.custom.len() {
            return None;
        }
        let removed = self.custom.remove(index);
        self.persist();
        Some(removed)
    }

    /// Replace the whole custom list.
    pub fn set_custom(&mut self, custom: Vec<Swatch>) {
        self.custom = custom;
        self.persist();
    }

    /// Remove every custom colour.
    pub fn clear_custom(&mut self) {
        self.custom.clear();
        self.persist();
    }

    fn persist(&self) {
        if self.path.is_none() {
            return;
        }
        if let Err(e) = self.save() {
            warn!(error = %e, "failed to save custom palette");
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

fn read_custom(path: &Path) -> Result<Vec<Swatch>> {
    let content = fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read palette: {}", e),
    })?;
    parse_palette_file(&content)
}

/// The fixed built-in colours: the primary block followed by the secondary block.
pub fn builtin_swatches() -> Vec<Swatch> {
    let mut swatches = Vec::with_capacity(PRIMARY_SWATCH_LEN + SECONDARY_SWATCH_LEN);

    // Grey ramp, white to black
    for step in 0..13u32 {
        let v = 255 - (step * 255 / 12) as u8;
        swatches.push(Swatch::new(Colour::rgb(v, v, v)));
    }

    // Full hues, then dark hues, each row closed by a grey
    for (lightness, grey) in [(0.5, 128), (0.25, 64)] {
        for step in 0..12 {
            let hue = step as f64 * 30.0;
            swatches.push(Swatch::new(hsla_to_rgba(hue, 1.0, lightness, 255)));
        }
        swatches.push(Swatch::new(Colour::rgb(grey, grey, grey)));
    }

    // Secondary block: 16 hues by 7 lightness levels
    for level in 1..=7 {
        let lightness = level as f64 * 0.125;
        for step in 0..16 {
            let hue = step as f64 * 22.5;
            swatches.push(Swatch::new(hsla_to_rgba(hue, 1.0, lightness, 255)));
        }
    }

    swatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_sizes() {
        let palette = Palette::new();
        assert_eq!(palette.builtin().len(), 151);
        assert_eq!(palette.primary_swatch().len(), PRIMARY_SWATCH_LEN);
        assert_eq!(palette.secondary_swatch().len(), SECONDARY_SWATCH_LEN);
        assert!(palette.custom().is_empty());
    }

    #[test]
    fn test_builtin_contents() {
        let builtin = builtin_swatches();
        assert_eq!(builtin[0].colour, Colour::WHITE);
        assert_eq!(builtin[12].colour, Colour::BLACK);
        assert_eq!(builtin[13].colour, Colour::rgb(255, 0, 0));
        assert_eq!(builtin[17].colour, Colour::rgb(0, 255, 0));
        assert_eq!(builtin[25].colour, Colour::rgb(128, 128, 128));
        assert_eq!(builtin[38].colour, Colour::rgb(64, 64, 64));
        assert!(builtin.iter().all(|s| s.colour.is_opaque()));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("none.xml");

        let palette = Palette::load(&path);

        assert!(palette.custom().is_empty());
        assert_eq!(palette.path(), Some(path.as_path()));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.xml");
        fs::write(&path, "<palette><custom><colour r=\"300\"/>").unwrap();

        let palette = Palette::load(&path);
        assert!(palette.custom().is_empty());

        assert!(Palette::try_load(&path).is_err());
    }

    #[test]
    fn test_edits_persist_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("custom.xml");

        let mut palette = Palette::load(&path);
        palette.add_custom(Colour::rgb(1, 2, 3));
        palette.add_custom(Swatch::named(Colour::new(4, 5, 6, 7), "seven"));

        let reloaded = Palette::try_load(&path).unwrap();
        assert_eq!(
            reloaded.custom(),
            &[
                Swatch::new(Colour::rgb(1, 2, 3)),
                Swatch::named(Colour::new(4, 5, 6, 7), "seven"),
            ]
        );

        palette.remove_custom(0);
        let reloaded = Palette::try_load(&path).unwrap();
        assert_eq!(reloaded.custom().len(), 1);
        assert_eq!(reloaded.custom()[0].name.as_deref(), Some("seven"));

        palette.clear_custom();
        assert!(Palette::try_load(&path).unwrap().custom().is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut palette = Palette::new();
        palette.add_custom(Colour::BLACK);
        assert_eq!(palette.remove_custom(3), None);
        assert_eq!(palette.custom().len(), 1);
    }

    #[test]
    fn test_save_without_path_fails() {
        let palette = Palette::new();
        assert!(palette.save().is_err());
    }

    #[test]
    fn test_reload_keeps_list_on_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.xml");

        let mut palette = Palette::load(&path);
        palette.set_custom(vec![Swatch::new(Colour::WHITE)]);

        fs::write(&path, "<palette><custom><colour r=\"x\"/></custom></palette>").unwrap();
        palette.reload();

        assert_eq!(palette.custom(), &[Swatch::new(Colour::WHITE)]);
    }

    #[test]
    fn test_edit_with_unwritable_path_keeps_memory() {
        let dir = tempdir().unwrap();
        // a directory cannot be overwritten as a file
        let mut palette = Palette::with_path(dir.path());
        palette.add_custom(Colour::BLACK);
        assert_eq!(palette.custom().len(), 1);
    }
}
