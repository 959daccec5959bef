use anyhow::Result;
use clap::Parser;
use kgs_roi::cli::{Cli, Commands};
use kgs_roi::commands::{ModelConfig, ReportConfig, SnapshotSource};
use kgs_roi::formatting::FormattingConfig;
use tracing_subscriber::EnvFilter;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Report {
            input,
            fields,
            config,
            format,
            output,
            clamp_negative,
            plain,
        } => {
            let snapshot = match input {
                Some(path) => SnapshotSource::File(path),
                None => SnapshotSource::Inline(fields.into()),
            };
            kgs_roi::commands::handle_report(ReportConfig {
                snapshot,
                config,
                format,
                output,
                clamp_negative,
                formatting_config: create_formatting_config(plain),
            })
        }
        Commands::Init { force } => kgs_roi::commands::init_config(force),
        Commands::Model { config } => kgs_roi::commands::show_model(ModelConfig { config }),
    }
}

// Logs go to stderr so report output on stdout stays clean
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
