use anyhow::Context;
use benchplot::settings::{self, CliOptions};
use benchplot::tracing::{get_subscriber, init_subscriber};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("benchplot", "info", std::io::stdout);
    init_subscriber(subscriber);

    let main_span = tracing::info_span!("main");
    let _main_span_guard = main_span.enter();

    let options = CliOptions::parse();
    let settings = settings::get_settings(&options).context("failed to resolve settings")?;

    match benchplot::run(&settings) {
        Ok(summary) => {
            tracing::info!(
                nr_records=%summary.nr_records,
                nr_charts=%summary.charts.len(),
                "benchmark report complete."
            );
            Ok(())
        },
        Err(err) => {
            tracing::error!(error=?err, "benchmark report failed.");
            Err(err.into())
        },
    }
}
