//! labels.rs — axis and colour-bar text.
//!
//! Pure string formatting so the exact label text is testable without a
//! drawing backend.

/// Substitute the Greek glyph for the conventional `Gamma` token.
pub fn qpoint_glyph(label: &str) -> &str {
    if label == "Gamma" { "Γ" } else { label }
}

/// Mode-coordinate axis label, e.g. `Q_Γ [amu^1/2 Å]`.
pub fn mode_axis_label(qlabel: Option<&str>) -> String {
    match qlabel {
        Some(q) => format!("Q_{} [amu^1/2 Å]", qpoint_glyph(q)),
        None => "Q [amu^1/2 Å]".to_string(),
    }
}

/// PEC energy axis label; the unit picks up `atom^-1` when energies were
/// divided by more than one atom.
pub fn energy_axis_label(qlabel: Option<&str>, per_atom: bool) -> String {
    let unit = energy_unit(per_atom);
    match qlabel {
        Some(q) => format!("ΔU(Q_{}) [{unit}]", qpoint_glyph(q)),
        None => format!("ΔU(Q) [{unit}]"),
    }
}

/// PES colour-bar label.
pub fn colorbar_label(per_atom: bool) -> String {
    format!("ΔU [{}]", energy_unit(per_atom))
}

fn energy_unit(per_atom: bool) -> &'static str {
    if per_atom { "meV atom^-1" } else { "meV" }
}
