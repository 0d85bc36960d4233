// tests/session_summary_test.rs

use std::fs;
use std::path::{Path, PathBuf};

use e4_session_render::config::RenderConfig;
use e4_session_render::error::SummaryError;
use e4_session_render::plot_functions::plot_session_summary::{
    build_session_figure, generate_session_summary,
};
use tempfile::TempDir;

const SESSION_NAME: &str = "2025-11-25_10-30-00";

fn session_dir(root: &TempDir) -> PathBuf {
    let dir = root.path().join(SESSION_NAME);
    fs::create_dir(&dir).unwrap();
    dir
}

fn write_column(dir: &Path, name: &str, values: &[f64]) {
    let body: String = values.iter().map(|v| format!("{v}\n")).collect();
    fs::write(dir.join(name), body).unwrap();
}

fn write_acc(dir: &Path, rows: &[[f64; 3]]) {
    let body: String = rows
        .iter()
        .map(|[x, y, z]| format!("{x},{y},{z}\n"))
        .collect();
    fs::write(dir.join("ACC.csv"), body).unwrap();
}

// 250 settling samples followed by 50 samples, 5 of them above 10 µS.
fn eda_300_rows() -> Vec<f64> {
    let mut values = vec![2.0; 250];
    values.extend((0..50).map(|i| if i % 10 == 7 { 14.0 } else { 3.0 + i as f64 * 0.1 }));
    values
}

fn bvp_rows() -> Vec<f64> {
    (0..64).map(|i| ((i as f64) * 0.3).sin() * 80.0).collect()
}

#[test]
fn missing_temperature_file_is_annotated() {
    let root = TempDir::new().unwrap();
    let dir = session_dir(&root);
    write_column(&dir, "BVP.csv", &bvp_rows());
    write_column(&dir, "EDA.csv", &eda_300_rows());
    write_acc(&dir, &[[64.0, 0.0, -64.0], [32.0, 16.0, 8.0]]);

    let summary = build_session_figure(&dir, &RenderConfig::default());
    let panels = &summary.figure.panels;

    assert_eq!(panels.len(), 4);
    assert_eq!(panels[2].title, "Temperature (°C) (No data collected)");
    assert!(!panels[2].has_data());
    assert!(panels[2].grid);
    assert!(panels[0].has_data());
    assert!(panels[3].has_data());
}

#[test]
fn figure_title_names_the_session() {
    let root = TempDir::new().unwrap();
    let dir = session_dir(&root);

    let summary = build_session_figure(&dir, &RenderConfig::default());
    assert_eq!(
        summary.figure.title,
        "Empatica E4 Data Session: 2025-11-25_10-30-00"
    );
    let titles: Vec<&str> = summary
        .figure
        .panels
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "BVP (No data collected)",
            "EDA (µS) (No data collected)",
            "Temperature (°C) (No data collected)",
            "Accelerometer (g) (No data collected)",
        ]
    );
    assert!(summary.eda_report.is_none());
}

#[test]
fn eda_panel_is_trimmed_clamped_and_reindexed() {
    let root = TempDir::new().unwrap();
    let dir = session_dir(&root);
    write_column(&dir, "EDA.csv", &eda_300_rows());

    let summary = build_session_figure(&dir, &RenderConfig::default());
    let eda = &summary.figure.panels[1];

    assert_eq!(eda.title, "EDA (µS) (First 250 cut, >10.0µS removed)");
    let points = &eda.series[0].data;
    assert_eq!(points.len(), 45);
    for (i, (x, y)) in points.iter().enumerate() {
        assert_eq!(*x, i as f64);
        assert!(*y <= 10.0);
    }
    // First kept sample comes after the settling window.
    assert_eq!(points[0].1, 3.0);

    let report = summary.eda_report.unwrap();
    assert_eq!(report.to_string(), "300 -> 45");
}

#[test]
fn eda_all_filtered_out_draws_no_line() {
    let root = TempDir::new().unwrap();
    let dir = session_dir(&root);
    let mut values = vec![1.0; 250];
    values.extend([10.5, 12.0, 30.0, 10.0001]);
    write_column(&dir, "EDA.csv", &values);

    let summary = build_session_figure(&dir, &RenderConfig::default());
    let eda = &summary.figure.panels[1];

    assert!(eda.title.contains("All data filtered out"));
    assert!(eda.series.is_empty());
    assert_eq!(summary.eda_report.unwrap().retained_count, 0);
}

#[test]
fn accelerometer_axes_are_scaled_to_g() {
    let root = TempDir::new().unwrap();
    let dir = session_dir(&root);
    let rows = [[64.0, -32.0, 0.0], [128.0, 16.0, -64.0], [1.0, 2.0, 3.0]];
    write_acc(&dir, &rows);

    let summary = build_session_figure(&dir, &RenderConfig::default());
    let acc = &summary.figure.panels[3];

    assert_eq!(acc.title, "Accelerometer (g)");
    assert!(acc.show_legend);
    assert_eq!(acc.series.len(), 3);
    for (axis_index, series) in acc.series.iter().enumerate() {
        assert_eq!(series.data.len(), rows.len());
        for (row_index, (x, y)) in series.data.iter().enumerate() {
            assert_eq!(*x, row_index as f64);
            assert_eq!(*y, rows[row_index][axis_index] / 64.0);
        }
    }
}

#[test]
fn malformed_file_only_affects_its_panel() {
    let root = TempDir::new().unwrap();
    let dir = session_dir(&root);
    fs::write(dir.join("BVP.csv"), "12.5\n13.0\nnot-a-number\n14.0\n").unwrap();
    write_column(&dir, "TEMP.csv", &[32.1, 32.2, 32.3, 32.4]);

    let summary = build_session_figure(&dir, &RenderConfig::default());
    let panels = &summary.figure.panels;

    assert!(panels[0].title.starts_with("Could not plot BVP: "));
    assert!(panels[0].title.contains("not-a-number"));
    assert!(!panels[0].has_data());
    assert_eq!(panels[2].title, "Temperature (°C)");
    assert_eq!(panels[2].series[0].data.len(), 4);
}

#[test]
fn writes_summary_image_into_session() {
    let root = TempDir::new().unwrap();
    let dir = session_dir(&root);
    write_column(&dir, "BVP.csv", &bvp_rows());
    write_column(&dir, "EDA.csv", &eda_300_rows());
    write_column(&dir, "TEMP.csv", &[32.1, 32.2, 32.3, 32.4]);
    write_acc(&dir, &[[64.0, 0.0, -64.0], [32.0, 16.0, 8.0]]);
    // A previous run's image is replaced.
    fs::write(dir.join("summary_graphs_updated.png"), "stale").unwrap();

    let config = RenderConfig {
        dpi: 40,
        ..RenderConfig::default()
    };
    let output_path = generate_session_summary(&dir, &config).unwrap();

    assert_eq!(output_path, dir.join("summary_graphs_updated.png"));
    let bytes = fs::read(&output_path).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn unwritable_session_reports_save_error() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("does-not-exist");

    let config = RenderConfig {
        dpi: 40,
        ..RenderConfig::default()
    };
    match generate_session_summary(&missing, &config) {
        Err(SummaryError::Save { path, .. }) => {
            assert_eq!(path, missing.join("summary_graphs_updated.png"));
        }
        other => panic!("expected a save error, got {:?}", other),
    }
}
