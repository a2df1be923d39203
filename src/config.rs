//! Plot styling: built-in defaults plus optional TOML style sheets.
//!
//! Styling is an explicit value handed to the render functions; the binaries
//! build one from the defaults, the `--style` sheets (later sheets win), and
//! the font/dark-mode flags. Sizes are in printer's points and scale with
//! the output DPI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MapError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureStyle {
    #[serde(default = "FigureStyle::default_width_in")]
    pub width_in: f64,
    #[serde(default = "FigureStyle::default_height_in")]
    pub height_in: f64,
    #[serde(default = "FigureStyle::default_line_width_pt")]
    pub line_width_pt: f64,
    #[serde(default = "FigureStyle::default_marker_radius_pt")]
    pub marker_radius_pt: f64,
    #[serde(default = "FigureStyle::default_contour_width_pt")]
    pub contour_width_pt: f64,
}

impl FigureStyle {
    fn default_width_in() -> f64 {
        12.6
    }
    fn default_height_in() -> f64 {
        12.0
    }
    fn default_line_width_pt() -> f64 {
        4.0
    }
    fn default_marker_radius_pt() -> f64 {
        9.0
    }
    fn default_contour_width_pt() -> f64 {
        1.5
    }
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width_in: Self::default_width_in(),
            height_in: Self::default_height_in(),
            line_width_pt: Self::default_line_width_pt(),
            marker_radius_pt: Self::default_marker_radius_pt(),
            contour_width_pt: Self::default_contour_width_pt(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontStyle {
    #[serde(default = "FontStyle::default_family")]
    pub family: String,
    #[serde(default = "FontStyle::default_label_pt")]
    pub label_pt: f64,
    #[serde(default = "FontStyle::default_tick_pt")]
    pub tick_pt: f64,
    #[serde(default = "FontStyle::default_legend_pt")]
    pub legend_pt: f64,
}

impl FontStyle {
    fn default_family() -> String {
        "sans-serif".to_string()
    }
    fn default_label_pt() -> f64 {
        50.0
    }
    fn default_tick_pt() -> f64 {
        40.0
    }
    fn default_legend_pt() -> f64 {
        36.0
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: Self::default_family(),
            label_pt: Self::default_label_pt(),
            tick_pt: Self::default_tick_pt(),
            legend_pt: Self::default_legend_pt(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteStyle {
    #[serde(default = "PaletteStyle::default_background")]
    pub background: String,
    #[serde(default = "PaletteStyle::default_foreground")]
    pub foreground: String,
}

impl PaletteStyle {
    fn default_background() -> String {
        "#FFFFFF".to_string()
    }
    fn default_foreground() -> String {
        "#000000".to_string()
    }

    fn dark() -> Self {
        Self {
            background: "#000000".to_string(),
            foreground: "#FFFFFF".to_string(),
        }
    }
}

impl Default for PaletteStyle {
    fn default() -> Self {
        Self {
            background: Self::default_background(),
            foreground: Self::default_foreground(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlotStyle {
    #[serde(default)]
    pub figure: FigureStyle,
    #[serde(default)]
    pub font: FontStyle,
    #[serde(default)]
    pub palette: PaletteStyle,
}

impl PlotStyle {
    /// Defaults for the 1-D curve figure.
    pub fn pec_default(dark: bool) -> Self {
        Self {
            palette: if dark {
                PaletteStyle::dark()
            } else {
                PaletteStyle::default()
            },
            ..Self::default()
        }
    }

    /// Defaults for the 2-D surface figure (wider, to fit the colour bar).
    pub fn pes_default(dark: bool) -> Self {
        let mut style = Self::pec_default(dark);
        style.figure.width_in = 15.5;
        style
    }

    /// Merge one partial sheet over this style.
    pub fn apply_sheet(&mut self, sheet: StyleSheet) {
        if let Some(figure) = sheet.figure {
            merge(&mut self.figure.width_in, figure.width_in);
            merge(&mut self.figure.height_in, figure.height_in);
            merge(&mut self.figure.line_width_pt, figure.line_width_pt);
            merge(&mut self.figure.marker_radius_pt, figure.marker_radius_pt);
            merge(&mut self.figure.contour_width_pt, figure.contour_width_pt);
        }
        if let Some(font) = sheet.font {
            merge(&mut self.font.family, font.family);
            merge(&mut self.font.label_pt, font.label_pt);
            merge(&mut self.font.tick_pt, font.tick_pt);
            merge(&mut self.font.legend_pt, font.legend_pt);
        }
        if let Some(palette) = sheet.palette {
            merge(&mut self.palette.background, palette.background);
            merge(&mut self.palette.foreground, palette.foreground);
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// A style sheet: the same shape as [`PlotStyle`] with every key optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleSheet {
    pub figure: Option<FigureSheet>,
    pub font: Option<FontSheet>,
    pub palette: Option<PaletteSheet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FigureSheet {
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub line_width_pt: Option<f64>,
    pub marker_radius_pt: Option<f64>,
    pub contour_width_pt: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FontSheet {
    pub family: Option<String>,
    pub label_pt: Option<f64>,
    pub tick_pt: Option<f64>,
    pub legend_pt: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaletteSheet {
    pub background: Option<String>,
    pub foreground: Option<String>,
}

/// Build the effective style: `base`, then each sheet in order (later sheets
/// override earlier ones), then the `--font` flag.
pub fn resolve_style(
    mut base: PlotStyle,
    sheets: &[PathBuf],
    font: Option<&str>,
) -> Result<PlotStyle, MapError> {
    for path in sheets {
        base.apply_sheet(load_sheet(path)?);
    }
    if let Some(family) = font {
        base.font.family = family.to_string();
    }
    Ok(base)
}

fn load_sheet(path: &Path) -> Result<StyleSheet, MapError> {
    let contents = fs::read_to_string(path).map_err(|source| MapError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|e| MapError::parse(path, 0, e.to_string()))
}
