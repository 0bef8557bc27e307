use clap::Parser;
use keystone_bench::cli::Cli;
use keystone_bench::config::load_config;
use keystone_bench::scenario::select;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let mut config = load_config()?;
    cli.apply(&mut config);
    config.validate()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let scenarios = select(cli.scenarios.as_slice())?;

    for scenario in &scenarios {
        let report = scenario.run(&config.bench)?;
        tracing::info!(
            scenario = %report.kind,
            iterations = report.iterations,
            elapsed = ?report.elapsed,
            mean_ns = report.mean_nanos(),
            "Scenario complete"
        );
    }

    Ok(())
}
