//! Immutable styling for logo rendering.
//!
//! Options are plain values passed per call; grid rendering derives scaled
//! copies instead of mutating shared settings.

use crate::error::{LogoError, Result};
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Font family and sizes used across a figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Font family name handed to the backend.
    pub family: String,
    /// Axis and panel-title size.
    pub size: u32,
    /// Figure-title size.
    pub title_size: u32,
    /// Lower bound when grid rendering scales the size down.
    pub min_size: u32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12,
            title_size: 22,
            min_size: 6,
        }
    }
}

/// Letter coloring for the stacked glyphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Chemistry classes: acidic red, basic blue, polar green, amide purple,
    /// hydrophobic black.
    Chemistry,
    /// One color for every letter.
    Uniform([u8; 3]),
}

impl ColorScheme {
    /// Color for a residue byte.
    pub fn residue_color(&self, residue: u8) -> RGBColor {
        match self {
            ColorScheme::Chemistry => match residue {
                b'D' | b'E' => RGBColor(196, 30, 30),
                b'K' | b'R' | b'H' => RGBColor(25, 60, 184),
                b'G' | b'S' | b'T' | b'Y' | b'C' => RGBColor(24, 138, 24),
                b'N' | b'Q' => RGBColor(138, 48, 168),
                _ => RGBColor(0, 0, 0),
            },
            ColorScheme::Uniform([r, g, b]) => RGBColor(*r, *g, *b),
        }
    }
}

/// Options for one rendering call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoOptions {
    pub font: FontSettings,
    pub colors: ColorScheme,
    /// 0-based position drawn with a translucent band behind the letters.
    pub highlight_position: Option<usize>,
    /// Band color as RGB.
    pub highlight_color: [u8; 3],
    /// Whether to draw the background mesh.
    pub show_grid: bool,
}

impl Default for LogoOptions {
    fn default() -> Self {
        Self {
            font: FontSettings::default(),
            colors: ColorScheme::Chemistry,
            highlight_position: None,
            highlight_color: [255, 215, 0],
            show_grid: false,
        }
    }
}

impl LogoOptions {
    /// Load options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(LogoError::from)
    }

    /// Load options from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Save options to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(LogoError::from)
    }

    /// Band color as a backend color.
    pub(crate) fn highlight_rgb(&self) -> RGBColor {
        let [r, g, b] = self.highlight_color;
        RGBColor(r, g, b)
    }

    /// Copy with the font sizes shrunk for a grid of `columns` panels,
    /// floored at the configured minimum. Panel titles use the scaled size;
    /// the shared figure title keeps the original `title_size`.
    pub(crate) fn scaled_for_columns(&self, columns: usize) -> Self {
        let mut scaled = self.clone();
        scaled.font.size = self
            .font
            .size
            .saturating_sub(columns as u32)
            .max(self.font.min_size);
        scaled.font.title_size = scaled.font.size;
        scaled
    }
}
