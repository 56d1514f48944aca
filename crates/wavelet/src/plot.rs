//! Coefficient plot layout and SVG rendering.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, instrument};

use crate::dwt::{dwt, dwt_max_level};
use crate::error::WaveletError;
use crate::filter::Wavelet;
use crate::series::TimeSeries;

/// Rows drawn with the thin line width.
const THIN_ROWS: usize = 3;
const THIN_LINE: f64 = 0.1;
const THICK_LINE: f64 = 0.5;

/// Figure options for [`wavelet_coeffs_plot`].
///
/// Sizes are in inches and points, rendered at 100 pixels per inch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotOptions {
    /// Figure width and height in inches.
    pub figsize: (f64, f64),
    /// Font size of the row labels.
    pub label_size: f64,
    /// Font size of the column titles.
    pub title_size: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            figsize: (10.0, 10.0),
            label_size: 10.0,
            title_size: 14.0,
        }
    }
}

impl PlotOptions {
    const DPI: f64 = 100.0;

    /// Figure size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * Self::DPI).round().max(1.0) as u32;
        (px(self.figsize.0), px(self.figsize.1))
    }
}

/// Layout of one row of the coefficient grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotRow {
    /// 1-based level index.
    pub level: usize,
    /// Line width in points.
    pub line_width: f64,
    /// Visible x range `[t0 // dec, t_last // dec]`.
    pub x_window: (f64, f64),
    /// Row label, `"Level i"`.
    pub label: String,
}

/// Single-level DWT coefficients with a per-level grid layout.
///
/// Every row shows the same top-level approximation and detail arrays; only
/// the line width and x-window change from row to row.
#[derive(Clone, Debug)]
pub struct CoeffPlot {
    approximation: Vec<f64>,
    detail: Vec<f64>,
    rows: Vec<PlotRow>,
    wavelet: Wavelet,
    options: PlotOptions,
}

impl CoeffPlot {
    /// Approximation coefficients.
    pub fn approximation(&self) -> &[f64] {
        &self.approximation
    }

    /// Detail coefficients.
    pub fn detail(&self) -> &[f64] {
        &self.detail
    }

    /// Grid rows, level 1 first.
    pub fn rows(&self) -> &[PlotRow] {
        &self.rows
    }

    /// Number of rows (the maximum decomposition level).
    pub fn levels(&self) -> usize {
        self.rows.len()
    }

    /// Wavelet used.
    pub fn wavelet(&self) -> Wavelet {
        self.wavelet
    }

    /// Figure options.
    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// Consumes the plot, returning `(approximation, detail)`.
    pub fn into_coeffs(self) -> (Vec<f64>, Vec<f64>) {
        (self.approximation, self.detail)
    }

    /// Draws the grid to an SVG file: approximation in red on the left,
    /// detail in green on the right.
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::PlotFailed`] if there are no rows or the
    /// backend fails.
    #[instrument(skip(self, path), fields(levels = self.rows.len()))]
    pub fn render_svg(&self, path: &Path) -> Result<(), WaveletError> {
        if self.rows.is_empty() {
            return Err(WaveletError::PlotFailed(
                "series too short for a single decomposition level".into(),
            ));
        }
        let root = SVGBackend::new(path, self.options.pixel_size()).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;
        let cells = root.split_evenly((self.rows.len(), 2));

        for (i, row) in self.rows.iter().enumerate() {
            let first = i == 0;
            self.draw_panel(
                &cells[2 * i],
                &self.approximation,
                row,
                RED,
                first.then_some("Approximation coefficients"),
                Some(row.label.as_str()),
            )?;
            self.draw_panel(
                &cells[2 * i + 1],
                &self.detail,
                row,
                GREEN,
                first.then_some("Detail coefficients"),
                None,
            )?;
        }
        root.present().map_err(plot_err)?;
        debug!(path = %path.display(), "coefficient plot written");
        Ok(())
    }

    fn draw_panel<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        data: &[f64],
        row: &PlotRow,
        color: RGBColor,
        title: Option<&str>,
        y_label: Option<&str>,
    ) -> Result<(), WaveletError> {
        let (x0, mut x1) = row.x_window;
        if x1 <= x0 {
            x1 = x0 + 1.0;
        }
        let (mut y0, mut y1) = data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            y0 -= 1.0;
            y1 += 1.0;
            if !(y0.is_finite() && y1.is_finite()) {
                y0 = -1.0;
                y1 = 1.0;
            }
        }

        let mut builder = ChartBuilder::on(area);
        builder
            .margin(5)
            .x_label_area_size(20)
            .y_label_area_size(if y_label.is_some() { 45 } else { 35 });
        if let Some(title) = title {
            builder.caption(title, ("sans-serif", self.options.title_size).into_font());
        }
        let mut chart = builder
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(plot_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .label_style(("sans-serif", self.options.label_size).into_font());
        if let Some(label) = y_label {
            mesh.y_desc(label);
        }
        mesh.draw().map_err(plot_err)?;

        let stroke = ((row.line_width * 4.0).round() as u32).max(1);
        chart
            .draw_series(LineSeries::new(
                data.iter().enumerate().map(|(t, &v)| (t as f64, v)),
                color.stroke_width(stroke),
            ))
            .map_err(plot_err)?;
        Ok(())
    }
}

fn plot_err<E: std::fmt::Display>(err: E) -> WaveletError {
    WaveletError::PlotFailed(err.to_string())
}

fn build_rows(n: usize, levels: usize) -> Vec<PlotRow> {
    let t_last = n.saturating_sub(1);
    let mut dec = 2usize;
    (0..levels)
        .map(|i| {
            let row = PlotRow {
                level: i + 1,
                line_width: if i < THIN_ROWS { THIN_LINE } else { THICK_LINE },
                x_window: (0.0, (t_last / dec) as f64),
                label: format!("Level {}", i + 1),
            };
            dec *= 2;
            row
        })
        .collect()
}

/// Computes the single-level DWT of `data` and lays out a coefficient grid
/// with one row per feasible decomposition level.
///
/// The layout is returned whether or not it is rendered; call
/// [`CoeffPlot::render_svg`] to draw it.
///
/// # Errors
///
/// Returns [`WaveletError::SeriesTooShort`] for fewer than two samples and
/// [`WaveletError::NonFiniteData`] if any value is NaN or infinite.
#[instrument(skip(data, options), fields(n = data.len(), wavelet = %wavelet))]
pub fn wavelet_coeffs_plot(
    data: &[f64],
    wavelet: Wavelet,
    options: PlotOptions,
) -> Result<CoeffPlot, WaveletError> {
    let series = TimeSeries::new(data)?;
    let (approximation, detail) = dwt(&series, wavelet);
    let levels = dwt_max_level(series.len(), wavelet.length());
    let rows = build_rows(series.len(), levels);
    debug!(levels, coeffs = approximation.len(), "coefficient plot laid out");
    Ok(CoeffPlot {
        approximation,
        detail,
        rows,
        wavelet,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 * 0.25).sin()).collect()
    }

    fn layout(data: &[f64], wavelet: Wavelet) -> Result<CoeffPlot, WaveletError> {
        wavelet_coeffs_plot(data, wavelet, PlotOptions::default())
    }

    #[test]
    fn options_defaults() {
        let o = PlotOptions::default();
        assert_eq!(o.figsize, (10.0, 10.0));
        assert_eq!(o.label_size, 10.0);
        assert_eq!(o.title_size, 14.0);
        assert_eq!(o.pixel_size(), (1000, 1000));
    }

    #[test]
    fn rows_match_max_level() {
        let plot = layout(&signal(256), Wavelet::Sym4).unwrap();
        assert_eq!(plot.levels(), 5);
        let labels: Vec<&str> = plot.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Level 1", "Level 2", "Level 3", "Level 4", "Level 5"]);
    }

    #[test]
    fn line_widths_thicken_after_three_rows() {
        let plot = layout(&signal(256), Wavelet::Haar).unwrap();
        let widths: Vec<f64> = plot.rows().iter().map(|r| r.line_width).collect();
        assert_eq!(widths, [0.1, 0.1, 0.1, 0.5, 0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn windows_halve_per_row() {
        let plot = layout(&signal(256), Wavelet::Sym4).unwrap();
        let windows: Vec<(f64, f64)> = plot.rows().iter().map(|r| r.x_window).collect();
        assert_eq!(
            windows,
            [(0.0, 127.0), (0.0, 63.0), (0.0, 31.0), (0.0, 15.0), (0.0, 7.0)]
        );
    }

    #[test]
    fn coefficients_are_single_level_dwt() {
        let x = signal(64);
        let plot = layout(&x, Wavelet::Db2).unwrap();
        let (a, d) = dwt(&x, Wavelet::Db2);
        assert_eq!(plot.approximation(), a.as_slice());
        assert_eq!(plot.detail(), d.as_slice());
        assert_eq!(plot.into_coeffs(), (a, d));
    }

    #[test]
    fn short_series_has_no_rows() {
        let plot = layout(&[1.0, 2.0, 3.0], Wavelet::Sym4).unwrap();
        assert_eq!(plot.levels(), 0);
        assert_eq!(plot.approximation().len(), 5);
    }

    #[test]
    fn invalid_input_rejected() {
        assert!(matches!(
            layout(&[], Wavelet::Sym4).unwrap_err(),
            WaveletError::SeriesTooShort { len: 0, min: 2 }
        ));
        assert!(matches!(
            layout(&[7.0], Wavelet::Sym4).unwrap_err(),
            WaveletError::SeriesTooShort { len: 1, min: 2 }
        ));
        assert!(matches!(
            layout(&[1.0, f64::NAN], Wavelet::Sym4).unwrap_err(),
            WaveletError::NonFiniteData
        ));
    }
}
