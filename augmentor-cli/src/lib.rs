//! Library interface for the `augmentor` command-line driver.
//!
//! The driver reads a JSON syntax document, loads layered configuration,
//! runs the augmentation pipeline, and writes each fragment plus a manifest
//! into an output directory.

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod input;
pub mod output;

use augmentor::{AugmentError, Encoding, FragmentSink, GenerationReport, MemorySink};
use camino::Utf8PathBuf;

use crate::cli::Args;
use crate::error::CliError;
use crate::output::DirectorySink;

/// What a driver run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Fragments registered in order.
    pub report: GenerationReport,
    /// Files written, empty for dry runs.
    pub files: Vec<Utf8PathBuf>,
    /// Manifest path, absent for dry runs.
    pub manifest: Option<Utf8PathBuf>,
}

/// Executes one generation pass for `args`.
///
/// The pass is staged in a [`MemorySink`] that applies the collision policy,
/// and the output directory is only touched once every fragment has been
/// accepted. A rejected collision therefore leaves no fragment files and no
/// manifest behind.
///
/// # Errors
///
/// Returns the first configuration, input, pipeline, or output failure.
pub fn run(args: &Args) -> Result<RunSummary, CliError> {
    let config = config::load(args)?;
    let generator = config.generator()?;
    let tree = input::read_tree(&args.input)?;

    let mut staged = MemorySink::new(config.on_collision);
    let report = generator.run(&tree, &mut staged)?;
    if args.is_dry_run {
        return Ok(RunSummary {
            report,
            ..RunSummary::default()
        });
    }

    let mut sink = DirectorySink::create(&config.out_dir, &config.extension, config.on_collision)?;
    for (key, text) in staged.iter() {
        sink.register(key, text, Encoding::Utf8)
            .map_err(AugmentError::from)?;
    }
    let manifest = sink.write_manifest(&report)?;
    Ok(RunSummary {
        report,
        files: sink.files().to_vec(),
        manifest: Some(manifest),
    })
}
