//! pes.rs — the 2-D potential energy surface figure.
//!
//! A flat-shaded mesh of grid cells, contour iso-lines on top, and a
//! colour-bar strip on the right edge.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::PlotStyle;
use crate::error::MapError;
use crate::render::contour::{contour_levels, iso_segments};
use crate::render::{parse_colour, Colormap, Figure};
use crate::surface::SurfaceGrid;

const CONTOUR_LEVELS: usize = 10;
const COLORBAR_STRIPS: usize = 128;

pub struct PesFigure {
    pub grid: SurfaceGrid,
    pub colormap: Colormap,
    pub contour_colour: RGBColor,
    pub x_label: String,
    pub y_label: String,
    pub cbar_label: String,
    pub style: PlotStyle,
}

impl Figure for PesFigure {
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
        let family = self.style.font.family.as_str();

        let (vmin, vmax) = self.grid.value_range();
        let shade = |v: f64| {
            let t = if vmax > vmin {
                (v - vmin) / (vmax - vmin)
            } else {
                0.5
            };
            self.colormap.sample(t)
        };

        let (main, bar) = root.split_horizontally((0.86 * w as f64) as u32);

        let x_range = axis_range(&self.grid.q1);
        let y_range = axis_range(&self.grid.q2);
        let mut chart = ChartBuilder::on(&main)
            .margin((0.03 * w.min(h) as f64) as u32)
            .x_label_area_size((0.15 * h as f64) as u32)
            .y_label_area_size((0.16 * w as f64) as u32)
            .build_cartesian_2d(x_range, y_range)
            .map_err(MapError::render)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(fg.stroke_width(px(2.0)))
            .x_labels(5)
            .y_labels(5)
            .x_desc(self.x_label.clone())
            .y_desc(self.y_label.clone())
            .axis_desc_style(
                (family, px(self.style.font.label_pt) as i32)
                    .into_font()
                    .color(&fg),
            )
            .label_style(
                (family, px(self.style.font.tick_pt) as i32)
                    .into_font()
                    .color(&fg),
            )
            .draw()
            .map_err(MapError::render)?;

        // Mesh: one flat cell per quad of neighbouring grid points, shaded
        // by the mean of its four corner values.
        let q1 = &self.grid.q1;
        let q2 = &self.grid.q2;
        let v = &self.grid.values;
        for r in 0..q2.len().saturating_sub(1) {
            for c in 0..q1.len().saturating_sub(1) {
                let mean = 0.25 * (v[r][c] + v[r][c + 1] + v[r + 1][c] + v[r + 1][c + 1]);
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(q1[c], q2[r]), (q1[c + 1], q2[r + 1])],
                        shade(mean).filled(),
                    )))
                    .map_err(MapError::render)?;
            }
        }

        // Contour iso-lines, geometrically spaced over the energy range.
        let contour_style = self
            .contour_colour
            .stroke_width(px(self.style.figure.contour_width_pt));
        for level in contour_levels(vmin, vmax, CONTOUR_LEVELS) {
            for (a, b) in iso_segments(q1, q2, v, level) {
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        vec![a, b],
                        contour_style,
                    )))
                    .map_err(MapError::render)?;
            }
        }

        self.draw_colorbar(&bar, px_per_pt, vmin, vmax, &fg)?;
        Ok(())
    }
}

impl PesFigure {
    fn draw_colorbar<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        px_per_pt: f64,
        vmin: f64,
        vmax: f64,
        fg: &RGBColor,
    ) -> Result<(), MapError> {
        let (w, h) = area.dim_in_pixel();
        let px = |pt: f64| (pt * px_per_pt).round().max(1.0) as u32;
        let family = self.style.font.family.as_str();

        let (lo, hi) = if vmax > vmin {
            (vmin, vmax)
        } else {
            (vmin - 0.5, vmin + 0.5)
        };

        let mut chart = ChartBuilder::on(area)
            .margin_top((0.03 * h as f64) as u32)
            .margin_bottom((0.15 * h as f64) as u32)
            .margin_left((0.10 * w as f64) as u32)
            .set_label_area_size(LabelAreaPosition::Right, (0.62 * w as f64) as u32)
            .build_cartesian_2d(0.0f64..1.0f64, lo..hi)
            .map_err(MapError::render)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .disable_x_axis()
            .axis_style(fg.stroke_width(px(1.5)))
            .y_labels(6)
            .y_desc(self.cbar_label.clone())
            .axis_desc_style(
                (family, px(self.style.font.label_pt) as i32)
                    .into_font()
                    .color(fg),
            )
            .label_style(
                (family, px(self.style.font.tick_pt) as i32)
                    .into_font()
                    .color(fg),
            )
            .draw()
            .map_err(MapError::render)?;

        let step = (hi - lo) / COLORBAR_STRIPS as f64;
        for i in 0..COLORBAR_STRIPS {
            let y0 = lo + i as f64 * step;
            let y1 = y0 + step;
            let t = (i as f64 + 0.5) / COLORBAR_STRIPS as f64;
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(0.0, y0), (1.0, y1)],
                    self.colormap.sample(t).filled(),
                )))
                .map_err(MapError::render)?;
        }

        Ok(())
    }
}

fn axis_range(coords: &[f64]) -> std::ops::Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in coords {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || hi <= lo {
        return lo.min(0.0) - 0.5..lo.max(0.0) + 0.5;
    }
    lo..hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_range_spans_the_coordinates() {
        assert_eq!(axis_range(&[-2.0, 0.0, 2.0]), -2.0..2.0);
    }

    #[test]
    fn axis_range_degenerate_grid_still_has_width() {
        let r = axis_range(&[1.0]);
        assert!(r.start < r.end);
    }
}
