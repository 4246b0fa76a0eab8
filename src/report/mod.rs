//! The report pipeline: loaded records in, three chart files per category out.

mod summary;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::chart::{BarChart, BoxChart, ChartKind, ChartRenderer, LineChart, RenderConfig};
use crate::dataset::{Dataset, Record, slug};
use crate::error::Result;
use crate::stats::aggregate;

pub use summary::format_summary;

/// Charts written for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: String,
    pub slug: String,
    /// Bar, line and box chart paths, in that order
    pub artifacts: Vec<PathBuf>,
}

impl CategoryReport {
    /// File names of the artifacts, without their directory.
    #[must_use]
    pub fn file_names(&self) -> Vec<String> {
        self.artifacts
            .iter()
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

pub struct ReportGenerator<R> {
    renderer: R,
    config: RenderConfig,
}

impl<R: ChartRenderer> ReportGenerator<R> {
    #[must_use]
    pub const fn new(renderer: R, config: RenderConfig) -> Self {
        Self { renderer, config }
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render every category of `dataset` in category order.
    ///
    /// # Errors
    /// Stops at the first chart that fails to render. Charts already written
    /// stay on disk.
    pub fn run(&self, dataset: &Dataset) -> Result<Vec<CategoryReport>> {
        if dataset.is_empty() {
            info!("no records, nothing to render");
            return Ok(Vec::new());
        }

        let mut reports = Vec::new();
        for category in dataset.categories() {
            let records = dataset.category(&category);
            if records.is_empty() {
                debug!(category = %category, "no records, skipping");
                continue;
            }
            reports.push(self.render_category(&category, &records)?);
        }
        info!(categories = reports.len(), "report complete");
        Ok(reports)
    }

    fn render_category(&self, category: &str, records: &[&Record]) -> Result<CategoryReport> {
        warn_suspicious_timings(category, records);

        let slug = slug(category);
        let groups = aggregate(records.iter().copied());
        let threshold = self.config.log_ratio_threshold;
        let mut artifacts = Vec::with_capacity(ChartKind::ALL.len());

        for kind in ChartKind::ALL {
            let path = self.config.output_dir.join(kind.file_name(&slug));
            match kind {
                ChartKind::Bar => self
                    .renderer
                    .render_bar(&BarChart::new(category, &groups), &path)?,
                ChartKind::Line => self
                    .renderer
                    .render_line(&LineChart::new(category, &groups, threshold), &path)?,
                ChartKind::Box => self.renderer.render_box(
                    &BoxChart::new(
                        category,
                        records,
                        self.config.whisker_percentiles,
                        threshold,
                    ),
                    &path,
                )?,
            }
            artifacts.push(path);
        }

        info!(
            category = %category,
            groups = groups.len(),
            records = records.len(),
            "charts rendered"
        );
        Ok(CategoryReport {
            category: category.to_string(),
            slug,
            artifacts,
        })
    }
}

/// Negative or non-finite timings are kept but reported once per category.
fn warn_suspicious_timings(category: &str, records: &[&Record]) {
    let suspicious = records
        .iter()
        .flat_map(|r| [r.edmonds_karp_ms, r.dinic_ms])
        .filter(|v| !v.is_finite() || *v < 0.0)
        .count();
    if suspicious > 0 {
        warn!(
            category = %category,
            values = suspicious,
            "negative or non-finite timings"
        );
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
