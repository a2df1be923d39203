use std::path::PathBuf;

use clap::Parser;

/// Plots mode-mapping potential energy curves (PEC).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct PecArgs {
    /// Path(s) to post-processed mode-mapping output
    #[arg(
        short = 'm',
        long = "map",
        num_args = 1..,
        default_value = "ModeMap_PostProcess.csv"
    )]
    pub map: Vec<PathBuf>,

    /// Line colour(s) as #RRGGBB, or a single colormap name to sample
    #[arg(long = "mapcolour", num_args = 1.., default_value = "#B43864")]
    pub mapcolour: Vec<String>,

    /// Qpoint label for the axis text (`Gamma` renders as the Γ glyph)
    #[arg(short, long)]
    pub qlabel: Option<String>,

    /// Number of atoms in the supercell used for mode-mapping
    #[arg(
        short = 'a',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub num_atoms: u32,

    /// Legend labels, one per curve
    #[arg(long = "legendlab", num_args = 1..)]
    pub legendlab: Vec<String>,

    /// Suffix for the output filenames
    #[arg(short, long)]
    pub output: Option<String>,

    /// Style sheets; later ones override earlier ones where they conflict
    #[arg(long = "style", num_args = 1..)]
    pub style: Vec<PathBuf>,

    /// Pixel density for the PNG file
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Font family to use
    #[arg(long)]
    pub font: Option<String>,

    /// Dark mode
    #[arg(short = 'z')]
    pub dark: bool,
}

/// Plots the mode-mapping potential energy surface (PES) spanned by two
/// phonon modes.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct PesArgs {
    /// Path to the post-processed 2-D mode-mapping output
    #[arg(
        short = 'f',
        long = "file",
        default_value = "ModeMap_PostProcess_2DMap.csv"
    )]
    pub file: PathBuf,

    /// Colormap for the surface
    #[arg(long = "mapcolour", default_value = "viridis")]
    pub mapcolour: String,

    /// Colour of the contour lines
    #[arg(long = "contour-col", default_value = "#000000")]
    pub contour_col: String,

    /// Qpoint labels for the x- and y-axis (a single label applies to both)
    #[arg(short = 'q', long = "qlabels", num_args = 1..=2)]
    pub qlabels: Vec<String>,

    /// Number of atoms in the supercell used for mode-mapping
    #[arg(
        short = 'a',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub num_atoms: u32,

    /// Suffix for the output filenames
    #[arg(short, long)]
    pub output: Option<String>,

    /// Style sheets; later ones override earlier ones where they conflict
    #[arg(long = "style", num_args = 1..)]
    pub style: Vec<PathBuf>,

    /// Pixel density for the PNG file
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Font family to use
    #[arg(long)]
    pub font: Option<String>,

    /// Dark mode
    #[arg(short = 'z')]
    pub dark: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pec_defaults() {
        let args = PecArgs::parse_from(["modeplot"]);
        assert_eq!(args.map, vec![PathBuf::from("ModeMap_PostProcess.csv")]);
        assert_eq!(args.mapcolour, vec!["#B43864".to_string()]);
        assert_eq!(args.num_atoms, 1);
        assert_eq!(args.dpi, 300);
        assert!(!args.dark);
    }

    #[test]
    fn pec_rejects_zero_atoms() {
        assert!(PecArgs::try_parse_from(["modeplot", "-a", "0"]).is_err());
    }

    #[test]
    fn pes_takes_at_most_two_qlabels() {
        let args = PesArgs::parse_from(["modeplot-2d", "-q", "Gamma", "X"]);
        assert_eq!(args.qlabels, vec!["Gamma".to_string(), "X".to_string()]);
        assert!(PesArgs::try_parse_from(["modeplot-2d", "-q", "G", "X", "L"]).is_err());
    }
}
