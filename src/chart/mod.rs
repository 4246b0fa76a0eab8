//! Chart generation for benchmark reports.
//!
//! Charts are first described as plain data ([`BarChart`], [`LineChart`],
//! [`BoxChart`]) and then drawn by a [`ChartRenderer`]. The bundled
//! [`PlottersRenderer`] writes PNG images.

mod config;
mod model;
mod plotters_renderer;

use std::path::Path;

pub use config::{FigureSize, RenderConfig};
pub use model::{
    BandPoint, BarChart, BoxChart, ChartKind, DINIC, EDMONDS_KARP, LabeledBox, LineChart,
    NODES_AXIS, TIME_AXIS, value_range,
};
pub use plotters_renderer::PlottersRenderer;

use crate::error::Result;

/// Draws chart descriptions to image files.
///
/// Each call writes exactly one file at `path` and holds no drawing state
/// once it returns.
pub trait ChartRenderer {
    /// # Errors
    /// Returns an error if the image cannot be drawn or written.
    fn render_bar(&self, chart: &BarChart, path: &Path) -> Result<()>;

    /// # Errors
    /// Returns an error if the image cannot be drawn or written.
    fn render_line(&self, chart: &LineChart, path: &Path) -> Result<()>;

    /// # Errors
    /// Returns an error if the image cannot be drawn or written.
    fn render_box(&self, chart: &BoxChart, path: &Path) -> Result<()>;
}
