//! Layered configuration for the `augmentor` driver.
//!
//! Values are merged in increasing precedence: built-in defaults, the TOML
//! configuration file, `AUGMENTOR_*` environment variables, and finally
//! command-line flags.

use augmentor::scan::DEFAULT_MARKER;
use augmentor::synthesize::{
    DEFAULT_FALLBACK_CONTAINER, DEFAULT_KEY_SUFFIX, DEFAULT_MESSAGE, DEFAULT_METHOD_NAME,
};
use augmentor::{CollisionPolicy, Generator, NodeKind, ScanRule, SynthesisOptions, ident};
use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::env::ConfigEnv;
use crate::error::CliError;

/// Configuration file read from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "augmentor.toml";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "AUGMENTOR_";
/// Prefixed variables that belong to the driver rather than the configuration.
const ENV_IGNORED: &[&str] = &["log"];

/// Fully merged driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Modifier that marks declarations.
    pub marker: String,
    /// Declaration kinds eligible for augmentation.
    pub kinds: Vec<NodeKind>,
    /// Container used when a declaration has no namespace parent.
    pub fallback_container: String,
    /// Suffix appended to declaration names to build fragment keys.
    pub key_suffix: String,
    /// Name of the generated method.
    pub method_name: String,
    /// Text printed by the generated method.
    pub message: String,
    /// File extension for written fragments.
    pub extension: String,
    /// Behaviour when two fragments share a key.
    pub on_collision: CollisionPolicy,
    /// Directory receiving generated fragments.
    pub out_dir: Utf8PathBuf,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_owned(),
            kinds: vec![NodeKind::Class],
            fallback_container: DEFAULT_FALLBACK_CONTAINER.to_owned(),
            key_suffix: DEFAULT_KEY_SUFFIX.to_owned(),
            method_name: DEFAULT_METHOD_NAME.to_owned(),
            message: DEFAULT_MESSAGE.to_owned(),
            extension: "cs".to_owned(),
            on_collision: CollisionPolicy::Overwrite,
            out_dir: Utf8PathBuf::from("generated"),
        }
    }
}

/// Command-line values that override every other layer when present.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    on_collision: Option<CollisionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<Utf8PathBuf>,
}

impl From<&Args> for CliOverrides {
    fn from(args: &Args) -> Self {
        Self {
            marker: args.marker.clone(),
            fallback_container: args.fallback_container.clone(),
            method_name: args.method_name.clone(),
            message: args.message.clone(),
            extension: args.extension.clone(),
            on_collision: args.on_collision.map(CollisionPolicy::from),
            out_dir: args.out_dir.clone(),
        }
    }
}

/// Loads and validates the configuration for `args`.
///
/// # Errors
///
/// Returns [`CliError::MissingConfig`] when an explicit `--config` path does
/// not exist, [`CliError::Config`] when a layer cannot be extracted, and
/// [`CliError::InvalidConfig`] or [`CliError::Augment`] when validation fails.
pub fn load(args: &Args) -> Result<AugmentConfig, CliError> {
    let config_path = match &args.config {
        Some(path) if !path.exists() => return Err(CliError::MissingConfig(path.clone())),
        Some(path) => path.clone(),
        None => Utf8PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    let config = layered_figment(&config_path, args).extract::<AugmentConfig>()?;
    config.validate()?;
    tracing::debug!(?config, path = %config_path, "configuration loaded");
    Ok(config)
}

fn layered_figment(config_path: &Utf8Path, args: &Args) -> Figment {
    Figment::from(Serialized::defaults(AugmentConfig::default()))
        .merge(Toml::file(config_path.as_std_path()))
        .merge(ConfigEnv::prefixed(ENV_PREFIX).ignore(ENV_IGNORED))
        .merge(Serialized::defaults(CliOverrides::from(args)))
}

impl AugmentConfig {
    /// Checks driver-level settings and the synthesis options.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] for an empty kind list, a kind that
    /// does not declare a type, a marker that is not an identifier, or an
    /// extension that is not alphanumeric; synthesis option failures surface
    /// as [`CliError::Augment`].
    pub fn validate(&self) -> Result<(), CliError> {
        if !ident::is_identifier(&self.marker) {
            return Err(CliError::InvalidConfig {
                key: "marker",
                message: format!("'{}' is not an identifier", self.marker),
            });
        }
        if self.kinds.is_empty() {
            return Err(CliError::InvalidConfig {
                key: "kinds",
                message: "at least one declaration kind is required".to_owned(),
            });
        }
        if let Some(kind) = self.kinds.iter().find(|kind| !kind.is_type_declaration()) {
            return Err(CliError::InvalidConfig {
                key: "kinds",
                message: format!("'{}' does not declare a type", kind.as_str()),
            });
        }
        let is_alphanumeric = self.extension.chars().all(|ch| ch.is_ascii_alphanumeric());
        if self.extension.is_empty() || !is_alphanumeric {
            return Err(CliError::InvalidConfig {
                key: "extension",
                message: format!(
                    "'{}' must be non-empty ASCII letters or digits",
                    self.extension
                ),
            });
        }
        self.synthesis_options().validate()?;
        Ok(())
    }

    /// Returns the scan rule described by this configuration.
    #[must_use]
    pub fn scan_rule(&self) -> ScanRule {
        ScanRule {
            marker: self.marker.clone(),
            kinds: self.kinds.clone(),
        }
    }

    /// Returns the synthesis options described by this configuration.
    #[must_use]
    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            fallback_container: self.fallback_container.clone(),
            key_suffix: self.key_suffix.clone(),
            method_name: self.method_name.clone(),
            message: self.message.clone(),
        }
    }

    /// Builds the generator for this configuration.
    ///
    /// # Errors
    ///
    /// Propagates synthesis option validation failures.
    pub fn generator(&self) -> Result<Generator, CliError> {
        Ok(Generator::new(self.scan_rule(), self.synthesis_options())?)
    }
}
