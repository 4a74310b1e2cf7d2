//! CLI entrypoint for `augmentor`.

use std::io::Write;

use augmentor_cli::RunSummary;
use augmentor_cli::cli::Args;
use augmentor_cli::error::CliError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "AUGMENTOR_LOG";

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let summary = augmentor_cli::run(&args)?;
    if args.is_dry_run {
        list_fragments(&summary)?;
    }
    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_fragments(summary: &RunSummary) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    for entry in &summary.report.entries {
        writeln!(stdout, "{}\t{}\t{}", entry.key, entry.container, entry.name).map_err(|io_err| {
            CliError::Io {
                path: "<stdout>".into(),
                source: io_err,
            }
        })?;
    }
    Ok(())
}
