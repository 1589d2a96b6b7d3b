use std::path::{Path, PathBuf};

use crate::category::CategoryView;
use crate::error::{ChartFailure, ChartFailures, FigureError, ReportError};
use crate::figure::Figure;
use crate::records::Table;
use crate::settings::{ChartSetting, Settings};
use crate::ReportResult;

/// Outcome of one rendered chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSummary {
    pub output: PathBuf,
    pub nr_records: usize,
    pub nr_lines: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub nr_records: usize,
    pub charts: Vec<ChartSummary>,
}

/// Builds the figure for every record of `table` matched by `pattern`, one line per label.
pub fn build_figure(table: &Table, pattern: &str, title: &str) -> (Figure, usize) {
    let view = CategoryView::matching(table, pattern);
    let figure = view
        .series()
        .iter()
        .fold(Figure::new(title), |figure, series| figure.plot(series));
    (figure, view.len())
}

/// Loads the results once, then renders each configured chart in turn.
///
/// A chart that fails to render does not stop the remaining charts; all failures are reported
/// together once every chart has been attempted.
#[tracing::instrument(level = "info", skip(settings), fields(input=?settings.input))]
pub fn run(settings: &Settings) -> ReportResult<ReportSummary> {
    let table = Table::load(&settings.input)?;

    let mut summary = ReportSummary { nr_records: table.len(), charts: Vec::with_capacity(settings.charts.len()) };
    let mut failures = vec![];

    for chart in settings.charts.iter() {
        let output = settings.output_path(chart);
        match render_chart(&table, chart, settings.dpi, &output) {
            Ok(chart_summary) => summary.charts.push(chart_summary),
            Err(error) => {
                tracing::error!(?error, ?output, title=%chart.title, "failed to render chart.");
                failures.push(ChartFailure { output, error });
            },
        }
    }

    if failures.is_empty() {
        Ok(summary)
    } else {
        Err(ReportError::Charts(ChartFailures(failures)))
    }
}

fn render_chart(table: &Table, chart: &ChartSetting, dpi: u32, output: &Path) -> Result<ChartSummary, FigureError> {
    let (figure, nr_records) = build_figure(table, chart.pattern.as_str(), chart.title.as_str());
    let figure = figure.with_dpi(dpi);

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    figure.save(output)?;

    let nr_lines = figure.lines().len();
    tracing::info!(?output, %nr_records, %nr_lines, title=%chart.title, "rendered chart.");
    Ok(ChartSummary { output: output.to_path_buf(), nr_records, nr_lines })
}
