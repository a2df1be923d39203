use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use modeplot::cli::PesArgs;
use modeplot::config::{resolve_style, PlotStyle};
use modeplot::error::MapError;
use modeplot::render::labels::{colorbar_label, mode_axis_label};
use modeplot::render::pes::PesFigure;
use modeplot::render::{parse_colour, write_outputs, Colormap, OutputTargets};
use modeplot::surface::load_surface;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = PesArgs::parse();

    let style = resolve_style(
        PlotStyle::pes_default(args.dark),
        &args.style,
        args.font.as_deref(),
    )?;
    let grid = load_surface(&args.file, args.num_atoms)?;

    // Well-floor diagnostic; ties are all listed.
    println!("minimum dU at (q1, q2): {:?}", grid.minima_coords());

    let colormap = Colormap::from_name(&args.mapcolour)
        .ok_or_else(|| MapError::Render(format!("unknown colormap `{}`", args.mapcolour)))?;
    let contour_colour = parse_colour(&args.contour_col)?;

    let (x_qlabel, y_qlabel) = match args.qlabels.as_slice() {
        [] => (None, None),
        [both] => (Some(both.as_str()), Some(both.as_str())),
        [x, y, ..] => (Some(x.as_str()), Some(y.as_str())),
    };

    let figure = PesFigure {
        grid,
        colormap,
        contour_colour,
        x_label: mode_axis_label(x_qlabel),
        y_label: mode_axis_label(y_qlabel),
        cbar_label: colorbar_label(args.num_atoms > 1),
        style,
    };

    let targets = OutputTargets::new("2D-modemap", args.output.as_deref(), &figure.style, args.dpi);
    write_outputs(&figure, &targets)?;
    info!(pdf = %targets.pdf.display(), png = %targets.png.display(), "wrote 2-D mode map");
    Ok(())
}
