use std::io;

use cadence_app::cli::{Cli, Command, OutputFormat, PreviewArgs};
use cadence_app::preview::{build_rows, confirm, render_table, write_json, write_json_lines};
use cadence_app::request::ScheduleRequest;
use cadence_core::config::{Settings, load_config};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    match cli.command {
        Command::Preview(args) => preview(&config, &args),
    }
}

fn preview(config: &Settings, args: &PreviewArgs) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(&args.request)?;
    let plan = ScheduleRequest::from_json(&contents)?.into_plan(&config.schedule)?;
    let events = plan.generate()?;
    let rows = build_rows(&plan, events)?;

    tracing::info!(
        protocol_id = %plan.protocol_id,
        request = %args.request.display(),
        count = rows.len(),
        "Schedule generated"
    );

    let stdout = io::stdout();
    if args.confirm {
        let rows = confirm(&rows)?;
        write_json_lines(rows, stdout.lock())?;
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => println!("{}", render_table(&rows)),
        OutputFormat::Json => write_json(&rows, stdout.lock())?,
    }
    Ok(())
}
