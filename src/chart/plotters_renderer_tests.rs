use std::fs;

use tempfile::TempDir;

use super::*;
use crate::dataset::Record;
use crate::stats::{LOG_RATIO_THRESHOLD, aggregate};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn record(nodes: u32, instance: &str, ek: f64, dinic: f64) -> Record {
    Record {
        nodes,
        edges: u64::from(nodes) * 2,
        category: "Dünn".to_string(),
        instance: instance.to_string(),
        edmonds_karp_ms: ek,
        dinic_ms: dinic,
    }
}

fn sample_records() -> Vec<Record> {
    vec![
        record(100, "1", 0.4, 0.2),
        record(100, "2", 0.6, 0.3),
        record(200, "1", 1.5, 0.5),
        record(200, "2", 1.9, 0.7),
        record(300, "1", 3.2, 0.9),
    ]
}

fn small_renderer() -> PlottersRenderer {
    PlottersRenderer::new(RenderConfig::default().with_dpi(40))
}

fn assert_png(path: &Path) {
    let bytes = fs::read(path).expect("chart file should exist");
    assert!(bytes.len() > PNG_SIGNATURE.len());
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}

mod label_tests {
    use super::*;

    #[test]
    fn slot_label_on_integer_positions() {
        let nodes = [100, 200, 300];
        assert_eq!(slot_label(&nodes, 0.0), "100");
        assert_eq!(slot_label(&nodes, 2.0), "300");
    }

    #[test]
    fn slot_label_empty_between_and_outside_slots() {
        let nodes = [100, 200];
        assert_eq!(slot_label(&nodes, 0.5), "");
        assert_eq!(slot_label(&nodes, -1.0), "");
        assert_eq!(slot_label(&nodes, 2.0), "");
    }

    #[test]
    fn box_label_maps_positions_to_algorithms() {
        let labels = [EDMONDS_KARP, DINIC];
        assert_eq!(box_label(&labels, 1.0), EDMONDS_KARP);
        assert_eq!(box_label(&labels, 2.0), DINIC);
        assert_eq!(box_label(&labels, 1.5), "");
        assert_eq!(box_label(&labels, 0.0), "");
        assert_eq!(box_label(&labels, 3.0), "");
    }

    #[test]
    fn format_time_precision_by_magnitude() {
        assert_eq!(format_time(1250.0), "1250");
        assert_eq!(format_time(12.34), "12.3");
        assert_eq!(format_time(0.25), "0.250");
        assert_eq!(format_time(0.00005), "5.0e-5");
        assert_eq!(format_time(0.0), "0");
    }

    #[test]
    fn drawable_depends_on_scale() {
        assert!(drawable(0.0, AxisScale::Linear));
        assert!(!drawable(0.0, AxisScale::Log));
        assert!(!drawable(f64::NAN, AxisScale::Linear));
        assert!(drawable(3.0, AxisScale::Log));
    }
}

mod legend_tests {
    use super::*;

    #[test]
    fn glyphs_fit_the_legend_slot() {
        for dpi in [40, 72, 150, 300, 600] {
            let renderer = PlottersRenderer::new(RenderConfig::default().with_dpi(dpi));
            let layout = renderer.legend_layout();
            let slot = i32::try_from(layout.slot).unwrap();

            assert!(layout.glyph >= 0, "dpi {dpi}");
            assert!(layout.glyph < slot, "line overlaps text at dpi {dpi}");
            assert!(
                2 * renderer.legend_swatch_half() <= layout.glyph,
                "swatch overlaps text at dpi {dpi}"
            );
        }
    }

    #[test]
    fn default_legend_leaves_a_gap_before_text() {
        let layout = PlottersRenderer::default().legend_layout();
        assert_eq!(layout.slot, 104);
        assert_eq!(layout.glyph, 83);
        assert_eq!(layout.margin, 21);
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn renders_bar_chart_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bar_duenn.png");
        let chart = BarChart::new("Dünn", &aggregate(&sample_records()));

        small_renderer().render_bar(&chart, &path).unwrap();
        assert_png(&path);
    }

    #[test]
    fn renders_line_chart_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("line_duenn.png");
        let chart = LineChart::new("Dünn", &aggregate(&sample_records()), LOG_RATIO_THRESHOLD);
        assert_eq!(chart.scale, AxisScale::Linear);

        small_renderer().render_line(&chart, &path).unwrap();
        assert_png(&path);
    }

    #[test]
    fn renders_log_scaled_charts() {
        let dir = TempDir::new().unwrap();
        let records = vec![
            record(100, "1", 0.01, 0.005),
            record(100, "2", 0.02, 0.004),
            record(2000, "1", 800.0, 12.0),
            record(2000, "2", 950.0, 15.0),
        ];
        let groups = aggregate(&records);
        let line = LineChart::new("Dünn", &groups, LOG_RATIO_THRESHOLD);
        assert_eq!(line.scale, AxisScale::Log);

        let refs: Vec<&Record> = records.iter().collect();
        let boxes = BoxChart::new("Dünn", &refs, (5.0, 95.0), LOG_RATIO_THRESHOLD);
        assert_eq!(boxes.scale, AxisScale::Log);

        let renderer = small_renderer();
        renderer
            .render_line(&line, &dir.path().join("line.png"))
            .unwrap();
        renderer
            .render_box(&boxes, &dir.path().join("box.png"))
            .unwrap();
        assert_png(&dir.path().join("line.png"));
        assert_png(&dir.path().join("box.png"));
    }

    #[test]
    fn renders_box_chart_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("box_duenn.png");
        let records = sample_records();
        let refs: Vec<&Record> = records.iter().collect();
        let chart = BoxChart::new("Dünn", &refs, (5.0, 95.0), LOG_RATIO_THRESHOLD);

        small_renderer().render_box(&chart, &path).unwrap();
        assert_png(&path);
    }

    #[test]
    fn single_group_renders() {
        let dir = TempDir::new().unwrap();
        let records = vec![record(500, "1", 2.0, 1.0)];
        let groups = aggregate(&records);
        let renderer = small_renderer();

        renderer
            .render_bar(&BarChart::new("Dünn", &groups), &dir.path().join("bar.png"))
            .unwrap();
        renderer
            .render_line(
                &LineChart::new("Dünn", &groups, LOG_RATIO_THRESHOLD),
                &dir.path().join("line.png"),
            )
            .unwrap();
        assert_png(&dir.path().join("bar.png"));
        assert_png(&dir.path().join("line.png"));
    }

    #[test]
    fn failed_drawing_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bar_duenn.png");

        let err = small_renderer()
            .render_to(&path, FigureSize::new(1.0, 1.0), |root| {
                root.fill(&WHITE)?;
                Err("series out of range".into())
            })
            .unwrap_err();

        assert!(matches!(err, ReportError::Render { .. }));
        assert!(err.to_string().contains("series out of range"));
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_path_is_render_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("bar.png");
        let chart = BarChart::new("Dünn", &aggregate(&sample_records()));

        let err = small_renderer().render_bar(&chart, &path).unwrap_err();
        assert!(matches!(err, ReportError::Render { .. }));
        assert!(err.to_string().contains("bar.png"));
    }
}
