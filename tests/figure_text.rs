//! The exact strings handed to the drawing layer: axis labels and output
//! file names.

use modeplot::config::PlotStyle;
use modeplot::render::labels::{colorbar_label, energy_axis_label, mode_axis_label};
use modeplot::render::OutputTargets;

#[test]
fn gamma_qlabel_reaches_the_axis_text_as_a_glyph() {
    let x_label = mode_axis_label(Some("Gamma"));
    let y_label = energy_axis_label(Some("Gamma"), false);
    assert!(x_label.contains('Γ'), "{x_label}");
    assert!(!x_label.contains("Gamma"), "{x_label}");
    assert!(y_label.contains('Γ'), "{y_label}");
}

#[test]
fn non_gamma_qlabels_are_used_verbatim() {
    assert_eq!(mode_axis_label(Some("X")), "Q_X [amu^1/2 Å]");
    assert_eq!(energy_axis_label(None, true), "ΔU(Q) [meV atom^-1]");
    assert_eq!(colorbar_label(false), "ΔU [meV]");
}

#[test]
fn output_names_match_both_tools() {
    let style = PlotStyle::pec_default(false);

    let pec = OutputTargets::new("modemap", None, &style, 300);
    assert_eq!(pec.pdf.to_str(), Some("modemap.pdf"));
    assert_eq!(pec.png.to_str(), Some("modemap.png"));

    let pes = OutputTargets::new("2D-modemap", Some("-PbTe"), &style, 150);
    assert_eq!(pes.pdf.to_str(), Some("2D-modemap-PbTe.pdf"));
    assert_eq!(pes.png.to_str(), Some("2D-modemap-PbTe.png"));
    // DPI shapes the raster only.
    assert_eq!(pes.png_size.0, (12.6f64 * 150.0).round() as u32);
    assert_eq!(pes.pdf_size_pt.0, 12.6 * 72.0);
}
