use std::path::PathBuf;

use super::*;

#[test]
fn default_matches_report_layout() {
    let config = RenderConfig::default();
    assert_eq!(config.dpi, 300);
    assert_eq!(config.wide_figure, FigureSize::new(11.0, 5.5));
    assert_eq!(config.box_figure, FigureSize::new(7.5, 5.5));
    assert!((config.bar_width - 0.42).abs() < f64::EPSILON);
    assert_eq!(config.whisker_percentiles, (5.0, 95.0));
    assert!((config.log_ratio_threshold - 200.0).abs() < f64::EPSILON);
    assert_eq!(config.output_dir, PathBuf::from("."));
}

#[test]
fn pixels_scale_with_dpi() {
    let config = RenderConfig::default();
    assert_eq!(config.pixels(config.wide_figure), (3300, 1650));
    assert_eq!(config.pixels(config.box_figure), (2250, 1650));

    let low = RenderConfig::default().with_dpi(100);
    assert_eq!(low.pixels(low.wide_figure), (1100, 550));
}

#[test]
fn points_to_pixels() {
    let config = RenderConfig::default().with_dpi(72);
    assert_eq!(config.points_to_pixels(10.0), 10);

    let config = RenderConfig::default();
    assert_eq!(config.points_to_pixels(12.0), 50);
}

#[test]
fn tiny_sizes_never_reach_zero() {
    let config = RenderConfig::default().with_dpi(1);
    assert_eq!(config.points_to_pixels(1.0), 1);
    assert_eq!(config.pixels(FigureSize::new(0.1, 0.1)), (1, 1));
}

#[test]
fn with_output_dir() {
    let config = RenderConfig::default().with_output_dir("/tmp/charts");
    assert_eq!(config.output_dir, PathBuf::from("/tmp/charts"));
}
