//! Rendering: everything that touches the drawing backends.
//!
//! The loaders hand plain vectors to the figure types in [`pec`] and
//! [`pes`]; each figure draws itself onto any plotters backend, and
//! [`write_outputs`] runs the same drawing twice, once into a cairo PDF
//! surface and once into a PNG bitmap sized by the requested DPI.

pub mod contour;
pub mod labels;
pub mod pec;
pub mod pes;

use std::path::PathBuf;

use cairo::{Context, PdfSurface};
use plotters::prelude::*;
use plotters::style::colors::colormaps::{
    BlackWhite, Bone, ColorMap, Copper, MandelbrotHSL, ViridisRGB, VulcanoHSL,
};
use plotters_cairo::CairoBackend;

use crate::config::PlotStyle;
use crate::error::MapError;

/// A figure that can draw itself onto any backend. `px_per_pt` scales all
/// point-sized style values to backend pixels.
pub trait Figure {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, plotters::coord::Shift>,
        px_per_pt: f64,
    ) -> Result<(), MapError>;
}

/// Output file pair for one invocation.
#[derive(Clone, Debug)]
pub struct OutputTargets {
    pub pdf: PathBuf,
    pub png: PathBuf,
    pub png_size: (u32, u32),
    pub pdf_size_pt: (f64, f64),
    pub png_px_per_pt: f64,
}

impl OutputTargets {
    /// `<stem><suffix>.pdf` / `.png`; the PNG canvas is `inches * dpi`
    /// pixels, the PDF canvas `inches * 72` points.
    pub fn new(stem: &str, suffix: Option<&str>, style: &PlotStyle, dpi: u32) -> Self {
        let base = format!("{stem}{}", suffix.unwrap_or(""));
        let dpi = f64::from(dpi);
        let png_size = (
            (style.figure.width_in * dpi).round() as u32,
            (style.figure.height_in * dpi).round() as u32,
        );
        Self {
            pdf: PathBuf::from(format!("{base}.pdf")),
            png: PathBuf::from(format!("{base}.png")),
            png_size,
            pdf_size_pt: (style.figure.width_in * 72.0, style.figure.height_in * 72.0),
            png_px_per_pt: dpi / 72.0,
        }
    }
}

/// Draw `fig` into both output files, PDF first.
pub fn write_outputs<F: Figure>(fig: &F, targets: &OutputTargets) -> Result<(), MapError> {
    let (w_pt, h_pt) = targets.pdf_size_pt;
    {
        let surface = PdfSurface::new(w_pt, h_pt, &targets.pdf).map_err(MapError::render)?;
        let cr = Context::new(&surface).map_err(MapError::render)?;
        let backend = CairoBackend::new(&cr, (w_pt.round() as u32, h_pt.round() as u32))
            .map_err(MapError::render)?;
        let root = backend.into_drawing_area();
        fig.draw(&root, 1.0)?;
        root.present().map_err(MapError::render)?;
        surface.finish();
    }
    {
        let root = BitMapBackend::new(&targets.png, targets.png_size).into_drawing_area();
        fig.draw(&root, targets.png_px_per_pt)?;
        root.present().map_err(MapError::render)?;
    }
    Ok(())
}

/// Named colormaps available to `--mapcolour`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    Viridis,
    Bone,
    Copper,
    Vulcano,
    BlackWhite,
    Mandelbrot,
}

impl Colormap {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "viridis" => Some(Self::Viridis),
            "bone" => Some(Self::Bone),
            "copper" => Some(Self::Copper),
            "vulcano" | "volcano" => Some(Self::Vulcano),
            "blackwhite" | "gray" | "grey" => Some(Self::BlackWhite),
            "mandelbrot" => Some(Self::Mandelbrot),
            _ => None,
        }
    }

    /// Colour at `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Viridis => ViridisRGB.get_color(t),
            Self::Bone => Bone.get_color(t),
            Self::Copper => Copper.get_color(t),
            Self::Vulcano => to_rgb(VulcanoHSL.get_color(t)),
            Self::BlackWhite => BlackWhite.get_color(t),
            Self::Mandelbrot => to_rgb(MandelbrotHSL.get_color(t)),
        }
    }
}

fn to_rgb<C: Color>(c: C) -> RGBColor {
    let bc = c.to_backend_color();
    RGBColor(bc.rgb.0, bc.rgb.1, bc.rgb.2)
}

/// Parse a `#RRGGBB` colour.
pub fn parse_colour(s: &str) -> Result<RGBColor, MapError> {
    let invalid = || MapError::Render(format!("invalid colour `{s}`: expected #RRGGBB"));
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
    Ok(RGBColor(r, g, b))
}

/// Resolve `--mapcolour` into one colour per series.
///
/// A single entry naming a known colormap becomes a five-colour cycle
/// sampled evenly from it; anything else is read as a list of hex colours
/// (so an unrecognised colormap name falls back to the raw colour list).
pub fn series_colours(mapcolour: &[String], n_series: usize) -> Result<Vec<RGBColor>, MapError> {
    assert!(!mapcolour.is_empty());
    let cycle: Vec<RGBColor> = if let [name] = mapcolour {
        match Colormap::from_name(name) {
            Some(map) => (0..5).map(|i| map.sample(i as f64 / 4.0)).collect(),
            None => vec![parse_colour(name)?],
        }
    } else {
        mapcolour
            .iter()
            .map(|s| parse_colour(s))
            .collect::<Result<_, _>>()?
    };
    Ok((0..n_series).map(|i| cycle[i % cycle.len()]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(parse_colour("#B43864").unwrap(), RGBColor(0xB4, 0x38, 0x64));
        assert!(parse_colour("B43864").is_err());
        assert!(parse_colour("#B438").is_err());
        assert!(parse_colour("#B438GG").is_err());
    }

    #[test]
    fn colormap_lookup_is_case_insensitive() {
        assert_eq!(Colormap::from_name("Viridis"), Some(Colormap::Viridis));
        assert_eq!(Colormap::from_name("plasma"), None);
    }

    #[test]
    fn single_colormap_name_becomes_a_cycle() {
        let colours = series_colours(&["viridis".to_string()], 7).unwrap();
        assert_eq!(colours.len(), 7);
        // 5-colour cycle wraps around.
        assert_eq!(colours[0], colours[5]);
        assert_ne!(colours[0], colours[4]);
    }

    #[test]
    fn unknown_name_falls_back_to_colour_list() {
        let colours = series_colours(&["#102030".to_string()], 2).unwrap();
        assert_eq!(colours, vec![RGBColor(0x10, 0x20, 0x30); 2]);
        assert!(series_colours(&["plasma".to_string()], 1).is_err());
    }

    #[test]
    fn output_names_follow_the_suffix() {
        let style = PlotStyle::pec_default(false);
        let t = OutputTargets::new("modemap", None, &style, 300);
        assert_eq!(t.pdf, PathBuf::from("modemap.pdf"));
        assert_eq!(t.png, PathBuf::from("modemap.png"));
        assert_eq!(t.png_size, (3780, 3600));

        let t = OutputTargets::new("2D-modemap", Some("_run2"), &style, 300);
        assert_eq!(t.png, PathBuf::from("2D-modemap_run2.png"));
    }
}
