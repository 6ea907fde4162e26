use anyhow::{Context, Result};
use buildsite::app::App;
use buildsite::cli::{Cli, CliHandler};
use buildsite::config::Config;
use clap::Parser;
use std::path::Path;
use std::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output doesn't interfere with the TUI
    init_logging(&cli.log_file, cli.debug)?;

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    // Handle CLI commands; `links` and `config` also work on an invalid file
    if let Some(command) = cli.command.clone() {
        let handler = CliHandler::new(config);
        return handler.handle_command(command).await;
    }

    let mut app = App::new(config)?;
    app.run().await
}

fn init_logging(path: &Path, debug: bool) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let log_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_max_level(log_level)
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
    Ok(())
}
