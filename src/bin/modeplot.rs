use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use modeplot::cli::PecArgs;
use modeplot::config::{resolve_style, PlotStyle};
use modeplot::curve::load_curves;
use modeplot::render::labels::{energy_axis_label, mode_axis_label};
use modeplot::render::pec::PecFigure;
use modeplot::render::{series_colours, write_outputs, OutputTargets};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = PecArgs::parse();

    let style = resolve_style(
        PlotStyle::pec_default(args.dark),
        &args.style,
        args.font.as_deref(),
    )?;
    let series = load_curves(&args.map, args.num_atoms)?;
    let colours = series_colours(&args.mapcolour, series.len())?;
    let labels = PecFigure::legend_labels(&args.legendlab, series.len());

    let qlabel = args.qlabel.as_deref();
    let figure = PecFigure {
        labels,
        colours,
        x_label: mode_axis_label(qlabel),
        y_label: energy_axis_label(qlabel, args.num_atoms > 1),
        series,
        style,
    };

    let targets = OutputTargets::new("modemap", args.output.as_deref(), &figure.style, args.dpi);
    write_outputs(&figure, &targets)?;
    info!(pdf = %targets.pdf.display(), png = %targets.png.display(), "wrote mode map");
    Ok(())
}
