mod fixtures;

use anyhow::Result;
use benchplot::error::ReportError;
use benchplot::settings::{ChartSetting, Settings};
use benchplot::report::ChartSummary;
use claim::*;
use pretty_assertions::assert_eq;

#[test]
fn test_report_clean_insert_scenario() -> Result<()> {
    fixtures::init_tracing();
    let main_span = tracing::info_span!("test_report_clean_insert_scenario");
    let _main_span_guard = main_span.enter();

    let dir = tempfile::tempdir()?;
    let settings = fixtures::settings_with_results(
        dir.path(),
        &["insert_a,1,10", "insert_a,2,15", "insert_b,1,12", "insert_b,2,20", "mixed_a,1,5"],
    )?;

    let summary = benchplot::run(&settings)?;
    assert_eq!(summary.nr_records, 5);
    assert_eq!(
        summary.charts,
        vec![
            ChartSummary {
                output: dir.path().join("insert_only_benchmark.png"),
                nr_records: 4,
                nr_lines: 2,
            },
            ChartSummary {
                output: dir.path().join("mixed_benchmark.png"),
                nr_records: 1,
                nr_lines: 1,
            },
        ]
    );

    for chart in summary.charts.iter() {
        let bytes = std::fs::read(&chart.output)?;
        assert_eq!(fixtures::png_dimensions(&bytes), (1000, 600));
    }

    Ok(())
}

#[test]
fn test_report_malformed_field_leaves_gap() -> Result<()> {
    fixtures::init_tracing();

    let dir = tempfile::tempdir()?;
    let settings = fixtures::settings_with_results(
        dir.path(),
        &["insert_c,1,8", "insert_c,abc,10", "insert_c,4,12", "mixed_c,2,"],
    )?;

    let summary = benchplot::run(&settings)?;
    assert_eq!(summary.nr_records, 4);
    assert_eq!(summary.charts[0].nr_records, 3);
    assert_eq!(summary.charts[0].nr_lines, 1);
    assert_eq!(summary.charts[1].nr_records, 1);
    assert!(dir.path().join("insert_only_benchmark.png").exists());
    assert!(dir.path().join("mixed_benchmark.png").exists());
    Ok(())
}

#[test]
fn test_report_missing_input_writes_nothing() -> Result<()> {
    fixtures::init_tracing();

    let dir = tempfile::tempdir()?;
    let settings = Settings {
        input: dir.path().join("benchmark_results.txt"),
        output_dir: dir.path().to_path_buf(),
        ..Settings::default()
    };

    let err = assert_err!(benchplot::run(&settings));
    assert!(matches!(err, ReportError::InputMissing { .. }), "unexpected error: {:?}", err);
    assert!(!dir.path().join("insert_only_benchmark.png").exists());
    assert!(!dir.path().join("mixed_benchmark.png").exists());
    Ok(())
}

#[test]
fn test_report_is_idempotent() -> Result<()> {
    fixtures::init_tracing();

    let dir = tempfile::tempdir()?;
    let input = fixtures::fixture_results_path();
    let settings = Settings { input, output_dir: dir.path().to_path_buf(), ..Settings::default() };

    let first = benchplot::run(&settings)?;
    let first_images = first
        .charts
        .iter()
        .map(|c| std::fs::read(&c.output))
        .collect::<std::io::Result<Vec<_>>>()?;

    let second = benchplot::run(&settings)?;
    let second_images = second
        .charts
        .iter()
        .map(|c| std::fs::read(&c.output))
        .collect::<std::io::Result<Vec<_>>>()?;

    assert_eq!(first, second);
    assert!(first_images == second_images, "re-rendered charts differ");
    Ok(())
}

#[test]
fn test_report_chart_failure_does_not_block_other_charts() -> Result<()> {
    fixtures::init_tracing();

    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("blocker"), "not a directory")?;

    let settings = Settings {
        charts: vec![
            ChartSetting::new("insert", "Insert-only Benchmark", "blocker/insert_only_benchmark.png"),
            ChartSetting::mixed(),
        ],
        ..fixtures::settings_with_results(dir.path(), &["insert_a,1,10", "mixed_a,1,5", "mixed_a,2,7"])?
    };

    let err = assert_err!(benchplot::run(&settings));
    match err {
        ReportError::Charts(failures) => {
            assert_eq!(failures.len(), 1);
            let failed: Vec<_> = failures.iter().map(|f| f.output.clone()).collect();
            assert_eq!(failed, vec![dir.path().join("blocker/insert_only_benchmark.png")]);
        },
        err => panic!("unexpected error: {:?}", err),
    }

    assert!(dir.path().join("mixed_benchmark.png").exists());
    Ok(())
}
