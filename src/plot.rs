//! # Plot
//!
//! Charts are not drawn by the distributions themselves. They describe the
//! chart ([CategoricalChart] or [SeriesChart]) and hand it to a [ChartSink],
//! wich can be any backend.
//!
//! [TextChart] is a small backend that draws horizontal bars as text:
//!
//! ```text
//! Bar Chart of Data
//! outcome | count
//!       0 | ##################################################  10
//!       1 | #########################                            5
//! ```

use std::io::Write;

use crate::{configuration::TEXT_CHART_WIDTH, errors::DistributionError};

/// The title and axis labels of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> ChartLabels {
        return ChartLabels {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        };
    }
}

/// Bars over named categories (for example `"0"` and `"1"`).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalChart {
    pub labels: ChartLabels,
    /// `(category, height)` in the order they must be shown.
    pub bars: Vec<(String, f64)>,
}

/// Bars over integer x-values.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesChart {
    pub labels: ChartLabels,
    /// `(x, y)` in the order they must be shown.
    pub points: Vec<(u64, f64)>,
}

/// A rendering backend.
pub trait ChartSink {
    /// Plots bars over named categories.
    fn plot_categorical_bars(&mut self, chart: &CategoricalChart) -> Result<(), DistributionError>;

    /// Plots bars over integer x-values.
    fn plot_series_bars(&mut self, chart: &SeriesChart) -> Result<(), DistributionError>;
}

/// Draws charts as horizontal text bars into any [Write]r.
///
/// The tallest bar is [TEXT_CHART_WIDTH] characters long.
pub struct TextChart<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> TextChart<W> {
        return TextChart {
            out,
            width: TEXT_CHART_WIDTH,
        };
    }

    /// Same as [TextChart::new] but with a custom length for the tallest bar.
    pub fn with_width(out: W, width: usize) -> TextChart<W> {
        return TextChart { out, width };
    }

    /// Returns the inner writer and drops self.
    pub fn into_inner(self) -> W {
        return self.out;
    }

    fn draw(&mut self, labels: &ChartLabels, rows: &[(String, f64)]) -> Result<(), DistributionError> {
        let max_height: f64 = rows
            .iter()
            .map(|(_, h)| *h)
            .filter(|h: &f64| h.is_finite())
            .fold(0.0, f64::max);

        let label_width: usize = rows
            .iter()
            .map(|(name, _)| name.len())
            .chain(std::iter::once(labels.x_label.len()))
            .max()
            .unwrap_or(0);

        writeln!(self.out, "{}", labels.title)?;
        writeln!(self.out, "{:>w$} | {}", labels.x_label, labels.y_label, w = label_width)?;

        for (name, height) in rows {
            let len: usize = if 0.0 < max_height && height.is_finite() && 0.0 < *height {
                ((height / max_height) * self.width as f64).round() as usize
            } else {
                0
            };

            writeln!(
                self.out,
                "{:>lw$} | {:<bw$} {}",
                name,
                "#".repeat(len),
                height,
                lw = label_width,
                bw = self.width
            )?;
        }

        self.out.flush()?;
        return Ok(());
    }
}

impl<W: Write> ChartSink for TextChart<W> {
    fn plot_categorical_bars(&mut self, chart: &CategoricalChart) -> Result<(), DistributionError> {
        return self.draw(&chart.labels, &chart.bars);
    }

    fn plot_series_bars(&mut self, chart: &SeriesChart) -> Result<(), DistributionError> {
        let rows: Vec<(String, f64)> = chart
            .points
            .iter()
            .map(|(x, y)| (x.to_string(), *y))
            .collect();
        return self.draw(&chart.labels, &rows);
    }
}
