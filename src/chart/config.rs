//! Fixed rendering settings.

use std::path::PathBuf;

use crate::stats::LOG_RATIO_THRESHOLD;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Bar and line charts
    pub wide_figure: FigureSize,
    /// Boxplot
    pub box_figure: FigureSize,
    /// Base font size in points; titles are 1.2x
    pub font_size_pt: f64,
    /// Width of one bar, in units of a V slot
    pub bar_width: f64,
    /// Opacity of the mean ± std band
    pub band_opacity: f64,
    /// Opacity of grid lines
    pub grid_opacity: f64,
    /// Whisker positions as (low, high) percentiles
    pub whisker_percentiles: (f64, f64),
    /// Value spread at which an axis switches to log scale
    pub log_ratio_threshold: f64,
    /// Directory the images are written to
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            wide_figure: FigureSize::new(11.0, 5.5),
            box_figure: FigureSize::new(7.5, 5.5),
            font_size_pt: 10.0,
            bar_width: 0.42,
            band_opacity: 0.18,
            grid_opacity: 0.3,
            whisker_percentiles: (5.0, 95.0),
            log_ratio_threshold: LOG_RATIO_THRESHOLD,
            output_dir: PathBuf::from("."),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub const fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Pixel dimensions of a figure at the configured DPI.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels(&self, figure: FigureSize) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (figure.width * dpi).round().max(1.0) as u32,
            (figure.height * dpi).round().max(1.0) as u32,
        )
    }

    /// Point size converted to pixels (1 pt = 1/72 in).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn points_to_pixels(&self, points: f64) -> u32 {
        (points * f64::from(self.dpi) / 72.0).round().max(1.0) as u32
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
