//! PNG output through the `plotters` bitmap backend.

use std::error::Error;
use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::debug;

use super::ChartRenderer;
use super::config::{FigureSize, RenderConfig};
use super::model::{BandPoint, BarChart, BoxChart, DINIC, EDMONDS_KARP, LineChart, NODES_AXIS, TIME_AXIS};
use crate::error::{ReportError, Result};
use crate::stats::AxisScale;

const EDMONDS_KARP_COLOR: RGBColor = RGBColor(31, 119, 180);
const DINIC_COLOR: RGBColor = RGBColor(255, 127, 14);
const FONT: &str = "sans-serif";

/// Half the width of a box, in x-axis units (one unit per box).
const BOX_HALF_WIDTH: f64 = 0.25;
const WHISKER_CAP_HALF_WIDTH: f64 = 0.125;

type Root<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type Chart<'a, 'b, Y> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, Y>>;
type DrawResult = std::result::Result<(), Box<dyn Error>>;

/// Pixel geometry of the series legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LegendLayout {
    margin: u32,
    /// Width reserved for a glyph, up to where the label text starts
    slot: u32,
    /// Glyph length; leaves a gap before the text
    glyph: i32,
}

/// Writes charts as PNG files.
#[derive(Debug, Clone, Default)]
pub struct PlottersRenderer {
    config: RenderConfig,
}

impl PlottersRenderer {
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Open a bitmap for `path`, draw into it and save it. The backend is
    /// dropped before returning, on success and on failure alike; a failed
    /// chart leaves no file behind.
    fn render_to<F>(&self, path: &Path, figure: FigureSize, draw: F) -> Result<()>
    where
        F: FnOnce(&Root<'_>) -> DrawResult,
    {
        let drawn = {
            let root = BitMapBackend::new(path, self.config.pixels(figure)).into_drawing_area();
            draw(&root).and_then(|()| root.present().map_err(Into::into))
        };
        // Dropping an unsaved backend still writes the partial image.
        if let Err(e) = drawn {
            if fs::remove_file(path).is_ok() {
                debug!(path = %path.display(), "partial chart removed");
            }
            return Err(ReportError::render(path, e));
        }
        debug!(path = %path.display(), "chart written");
        Ok(())
    }

    fn font_px(&self, scale: f64) -> u32 {
        self.config
            .points_to_pixels(self.config.font_size_pt * scale)
    }

    fn line_px(&self) -> u32 {
        self.config.points_to_pixels(1.5)
    }

    fn chart_builder<'a, 'b>(
        &self,
        root: &'a Root<'b>,
        title: &str,
    ) -> ChartBuilder<'a, 'static, BitMapBackend<'b>> {
        let mut builder = ChartBuilder::on(root);
        builder
            .caption(title, (FONT, self.font_px(1.2)))
            .margin(self.font_px(1.0))
            .x_label_area_size(self.font_px(3.5))
            .y_label_area_size(self.font_px(6.0));
        builder
    }

    /// plotters puts each legend glyph at the start of a `slot` pixel wide
    /// column and the label text right after it.
    fn legend_layout(&self) -> LegendLayout {
        let slot = self.font_px(2.5);
        let gap = self.font_px(0.5);
        LegendLayout {
            margin: self.font_px(0.5),
            slot,
            glyph: i32::try_from(slot.saturating_sub(gap)).unwrap_or(0),
        }
    }

    fn legend_swatch_half(&self) -> i32 {
        let side = i32::try_from(self.font_px(0.8)).unwrap_or(0);
        side.min(self.legend_layout().glyph) / 2
    }

    fn draw_legend<'a, 'b: 'a, Y>(&self, ctx: &mut Chart<'a, 'b, Y>) -> DrawResult
    where
        Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        let layout = self.legend_layout();
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .legend_area_size(layout.slot)
            .margin(layout.margin)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font((FONT, self.font_px(1.0)))
            .draw()?;
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_bar(&self, root: &Root<'_>, chart: &BarChart) -> DrawResult {
        root.fill(&WHITE)?;

        let slots = chart.nodes.len().max(1);
        let (y_lo, y_hi) = chart.y_range();
        let mut ctx = self
            .chart_builder(root, &chart.title)
            .build_cartesian_2d(-0.5..(slots as f64 - 0.5), y_lo..y_hi)?;

        let nodes = &chart.nodes;
        let x_formatter = |x: &f64| slot_label(nodes, *x);
        let y_formatter = |y: &f64| format_time(*y);
        ctx.configure_mesh()
            .disable_x_mesh()
            .bold_line_style(BLACK.mix(self.config.grid_opacity).stroke_width(1))
            .light_line_style(TRANSPARENT.stroke_width(0))
            .x_labels(slots)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .x_desc(NODES_AXIS)
            .y_desc(TIME_AXIS)
            .label_style((FONT, self.font_px(0.9)))
            .axis_desc_style((FONT, self.font_px(1.0)))
            .draw()?;

        let width = self.config.bar_width;
        let gap = width * 0.04;
        for (label, values, offset, color) in [
            (EDMONDS_KARP, &chart.edmonds_karp, -width, EDMONDS_KARP_COLOR),
            (DINIC, &chart.dinic, 0.0, DINIC_COLOR),
        ] {
            let bars = values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| {
                    let left = i as f64 + offset;
                    Rectangle::new([(left + gap, 0.0), (left + width - gap, *v)], color.filled())
                });
            ctx.draw_series(bars)?
                .label(label)
                .legend(legend_swatch(self.legend_swatch_half(), color));
        }

        self.draw_legend(&mut ctx)
    }

    fn draw_line(&self, root: &Root<'_>, chart: &LineChart) -> DrawResult {
        root.fill(&WHITE)?;

        let (x_lo, x_hi) = chart.x_range();
        let (y_lo, y_hi) = chart.y_range();
        if chart.scale.is_log() {
            let mut ctx = self
                .chart_builder(root, &chart.title)
                .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;
            self.draw_line_body(&mut ctx, chart, y_lo)
        } else {
            let mut ctx = self
                .chart_builder(root, &chart.title)
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
            self.draw_line_body(&mut ctx, chart, f64::NEG_INFINITY)
        }
    }

    /// `floor` is the lowest drawable value; band edges below it are raised.
    fn draw_line_body<'a, 'b: 'a, Y>(
        &self,
        ctx: &mut Chart<'a, 'b, Y>,
        chart: &LineChart,
        floor: f64,
    ) -> DrawResult
    where
        Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        let x_formatter = |x: &f64| format!("{x:.0}");
        let y_formatter = |y: &f64| format_time(*y);
        ctx.configure_mesh()
            .bold_line_style(BLACK.mix(self.config.grid_opacity).stroke_width(1))
            .light_line_style(TRANSPARENT.stroke_width(0))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .x_desc(NODES_AXIS)
            .y_desc(TIME_AXIS)
            .label_style((FONT, self.font_px(0.9)))
            .axis_desc_style((FONT, self.font_px(1.0)))
            .draw()?;

        let marker = self.config.points_to_pixels(3.0);
        for (label, points, color) in [
            (EDMONDS_KARP, &chart.edmonds_karp, EDMONDS_KARP_COLOR),
            (DINIC, &chart.dinic, DINIC_COLOR),
        ] {
            let visible: Vec<&BandPoint> = points
                .iter()
                .filter(|p| drawable(p.mean, chart.scale))
                .collect();

            if visible.len() >= 2 {
                let mut band: Vec<(f64, f64)> = visible.iter().map(|p| (p.x, p.high)).collect();
                band.extend(visible.iter().rev().map(|p| (p.x, p.low.max(floor))));
                ctx.draw_series(std::iter::once(Polygon::new(
                    band,
                    color.mix(self.config.band_opacity).filled(),
                )))?;
            }

            ctx.draw_series(LineSeries::new(
                visible.iter().map(|p| (p.x, p.mean)),
                color.stroke_width(self.line_px()),
            ))?
            .label(label)
            .legend(legend_line(self.legend_layout().glyph, self.line_px(), color));

            ctx.draw_series(
                visible
                    .iter()
                    .map(|p| Circle::new((p.x, p.mean), marker, color.filled())),
            )?;
        }

        self.draw_legend(ctx)
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_box(&self, root: &Root<'_>, chart: &BoxChart) -> DrawResult {
        root.fill(&WHITE)?;

        let x_hi = chart.boxes.len().max(1) as f64 + 0.5;
        let (y_lo, y_hi) = chart.y_range();
        if chart.scale.is_log() {
            let mut ctx = self
                .chart_builder(root, &chart.title)
                .build_cartesian_2d(0.5..x_hi, (y_lo..y_hi).log_scale())?;
            self.draw_box_body(&mut ctx, chart, y_lo)
        } else {
            let mut ctx = self
                .chart_builder(root, &chart.title)
                .build_cartesian_2d(0.5..x_hi, y_lo..y_hi)?;
            self.draw_box_body(&mut ctx, chart, f64::NEG_INFINITY)
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_box_body<'a, 'b: 'a, Y>(
        &self,
        ctx: &mut Chart<'a, 'b, Y>,
        chart: &BoxChart,
        floor: f64,
    ) -> DrawResult
    where
        Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        let labels: Vec<&str> = chart.boxes.iter().map(|b| b.label).collect();
        let x_formatter = |x: &f64| box_label(&labels, *x);
        let y_formatter = |y: &f64| format_time(*y);
        ctx.configure_mesh()
            .disable_x_mesh()
            .bold_line_style(BLACK.mix(self.config.grid_opacity).stroke_width(1))
            .light_line_style(TRANSPARENT.stroke_width(0))
            .x_labels(labels.len().max(1))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .y_desc(TIME_AXIS)
            .label_style((FONT, self.font_px(0.9)))
            .axis_desc_style((FONT, self.font_px(1.0)))
            .draw()?;

        let line = BLACK.stroke_width(self.line_px() / 2 + 1);
        for (i, labeled) in chart.boxes.iter().enumerate() {
            let x = (i + 1) as f64;
            let color = if i == 0 { EDMONDS_KARP_COLOR } else { DINIC_COLOR };
            let stats = labeled.stats;
            let [low, q1, median, q3, high] = [
                stats.whisker_low,
                stats.q1,
                stats.median,
                stats.q3,
                stats.whisker_high,
            ]
            .map(|v| v.max(floor));

            let body = [(x - BOX_HALF_WIDTH, q1), (x + BOX_HALF_WIDTH, q3)];
            ctx.draw_series([
                Rectangle::new(body, color.mix(0.35).filled()),
                Rectangle::new(body, line),
            ])?;
            ctx.draw_series([
                PathElement::new(vec![(x, q1), (x, low)], line),
                PathElement::new(vec![(x, q3), (x, high)], line),
                PathElement::new(
                    vec![(x - WHISKER_CAP_HALF_WIDTH, low), (x + WHISKER_CAP_HALF_WIDTH, low)],
                    line,
                ),
                PathElement::new(
                    vec![(x - WHISKER_CAP_HALF_WIDTH, high), (x + WHISKER_CAP_HALF_WIDTH, high)],
                    line,
                ),
                PathElement::new(
                    vec![(x - BOX_HALF_WIDTH, median), (x + BOX_HALF_WIDTH, median)],
                    color.stroke_width(self.line_px()),
                ),
            ])?;
        }
        Ok(())
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render_bar(&self, chart: &BarChart, path: &Path) -> Result<()> {
        self.render_to(path, self.config.wide_figure, |root| self.draw_bar(root, chart))
    }

    fn render_line(&self, chart: &LineChart, path: &Path) -> Result<()> {
        self.render_to(path, self.config.wide_figure, |root| self.draw_line(root, chart))
    }

    fn render_box(&self, chart: &BoxChart, path: &Path) -> Result<()> {
        self.render_to(path, self.config.box_figure, |root| self.draw_box(root, chart))
    }
}

fn legend_swatch(half: i32, color: RGBColor) -> impl Fn((i32, i32)) -> Rectangle<(i32, i32)> {
    move |(x, y)| Rectangle::new([(x, y - half), (x + 2 * half, y + half)], color.filled())
}

fn legend_line(
    length: i32,
    width: u32,
    color: RGBColor,
) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| PathElement::new(vec![(x, y), (x + length, y)], color.stroke_width(width))
}

fn drawable(value: f64, scale: AxisScale) -> bool {
    value.is_finite() && (!scale.is_log() || value > 0.0)
}

/// Node-count label for a bar slot; empty between slots.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn slot_label(nodes: &[u32], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    nodes
        .get(slot as usize)
        .map_or_else(String::new, ToString::to_string)
}

/// Algorithm label under box `x` (boxes sit at 1, 2, ...).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn box_label(labels: &[&str], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 1.0 {
        return String::new();
    }
    labels
        .get(slot as usize - 1)
        .map_or_else(String::new, |label| (*label).to_string())
}

/// Tick label for a time in milliseconds.
fn format_time(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 100.0 {
        format!("{value:.0}")
    } else if magnitude >= 1.0 {
        format!("{value:.1}")
    } else if magnitude >= 1e-3 {
        format!("{value:.3}")
    } else if magnitude > 0.0 {
        format!("{value:.1e}")
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
#[path = "plotters_renderer_tests.rs"]
mod tests;
