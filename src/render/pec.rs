//! pec.rs — the 1-D potential energy curve figure.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::PlotStyle;
use crate::curve::CurveSeries;
use crate::error::MapError;
use crate::render::{parse_colour, Figure};

/// Everything needed to draw the PEC plot, backend-free.
pub struct PecFigure {
    pub series: Vec<CurveSeries>,
    pub labels: Vec<String>,
    pub colours: Vec<RGBColor>,
    pub x_label: String,
    pub y_label: String,
    pub style: PlotStyle,
}

impl PecFigure {
    /// Legend labels: `--legendlab` entries, padded with `mode<i>`.
    pub fn legend_labels(legendlab: &[String], n_series: usize) -> Vec<String> {
        (0..n_series)
            .map(|i| {
                legendlab
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("mode{}", i + 1))
            })
            .collect()
    }

    fn data_ranges(&self) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for s in &self.series {
            for &v in &s.coords {
                x = (x.0.min(v), x.1.max(v));
            }
            for &v in &s.energies {
                y = (y.0.min(v), y.1.max(v));
            }
        }
        (padded(x), padded(y))
    }
}

fn padded((lo, hi): (f64, f64)) -> std::ops::Range<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return -1.0..1.0;
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 1.0 };
    (lo - pad)..(hi + pad)
}

impl Figure for PecFigure {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        px_per_pt: f64,
    ) -> Result<(), MapError> {
        let bg = parse_colour(&self.style.palette.background)?;
        let fg = parse_colour(&self.style.palette.foreground)?;
        root.fill(&bg).map_err(MapError::render)?;

        let (w, h) = root.dim_in_pixel();
        let px = |pt: f64| (pt * px_per_pt).round().max(1.0) as u32;

        let (x_range, y_range) = self.data_ranges();
        let mut chart = ChartBuilder::on(root)
            .margin((0.03 * w.min(h) as f64) as u32)
            .x_label_area_size((0.16 * h as f64) as u32)
            .y_label_area_size((0.17 * w as f64) as u32)
            .build_cartesian_2d(x_range, y_range)
            .map_err(MapError::render)?;

        let family = self.style.font.family.as_str();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(fg.stroke_width(px(2.0)))
            .x_labels(5)
            .y_labels(6)
            .x_desc(self.x_label.clone())
            .y_desc(self.y_label.clone())
            .axis_desc_style((family, px(self.style.font.label_pt) as i32).into_font().color(&fg))
            .label_style((family, px(self.style.font.tick_pt) as i32).into_font().color(&fg))
            .draw()
            .map_err(MapError::render)?;

        let line_w = px(self.style.figure.line_width_pt);
        let marker_r = px(self.style.figure.marker_radius_pt) as i32;
        let show_legend = self.series.len() > 1;

        for (i, series) in self.series.iter().enumerate() {
            let colour = self.colours[i % self.colours.len()];
            let points = series
                .coords
                .iter()
                .copied()
                .zip(series.energies.iter().copied());

            let drawn = chart
                .draw_series(LineSeries::new(points.clone(), colour.stroke_width(line_w)))
                .map_err(MapError::render)?;
            if show_legend {
                let legend_len = px(20.0) as i32;
                drawn.label(self.labels[i].as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + legend_len, y)], colour.stroke_width(3))
                });
            }

            chart
                .draw_series(points.map(|(x, y)| Circle::new((x, y), marker_r, colour.filled())))
                .map_err(MapError::render)?;
        }

        if show_legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(TRANSPARENT)
                .border_style(TRANSPARENT)
                .label_font((family, px(self.style.font.legend_pt) as i32).into_font().color(&fg))
                .draw()
                .map_err(MapError::render)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_labels_pad_with_mode_numbers() {
        let labels = PecFigure::legend_labels(&["acoustic".to_string()], 3);
        assert_eq!(labels, vec!["acoustic", "mode2", "mode3"]);
    }

    #[test]
    fn padded_range_handles_flat_data() {
        let r = padded((2.0, 2.0));
        assert!(r.start < 2.0 && r.end > 2.0);
    }
}
