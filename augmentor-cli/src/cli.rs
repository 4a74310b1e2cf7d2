//! Command-line interface definitions for `augmentor`.

use augmentor::CollisionPolicy;
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, ValueEnum};

/// Collision policies accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollisionArg {
    /// Keep the last fragment written under a key.
    Overwrite,
    /// Fail the pass when a key repeats.
    Reject,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Overwrite => Self::Overwrite,
            CollisionArg::Reject => Self::Reject,
        }
    }
}

/// Parsed CLI arguments for `augmentor`.
#[derive(Debug, Default, Parser)]
#[command(name = "augmentor")]
#[command(about = "Generate companion source fragments for marked declarations")]
#[command(version)]
pub struct Args {
    /// JSON syntax document emitted by the front end.
    #[arg(value_name = "TREE_JSON")]
    pub input: Utf8PathBuf,
    /// Configuration file (defaults to `augmentor.toml` when present).
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Output directory for generated fragments.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Modifier that marks declarations for augmentation.
    #[arg(long)]
    pub marker: Option<String>,
    /// Container used when a declaration has no namespace parent.
    #[arg(long)]
    pub fallback_container: Option<String>,
    /// Name of the generated method.
    #[arg(long)]
    pub method_name: Option<String>,
    /// Text printed by the generated method.
    #[arg(long)]
    pub message: Option<String>,
    /// File extension for generated fragments.
    #[arg(long)]
    pub extension: Option<String>,
    /// Behaviour when two fragments share a key.
    #[arg(long, value_enum)]
    pub on_collision: Option<CollisionArg>,
    /// Run the pipeline without writing files; list fragments on stdout.
    #[arg(long = "dry-run")]
    pub is_dry_run: bool,
    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
