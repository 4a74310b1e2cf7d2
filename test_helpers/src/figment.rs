//! Helpers for running configuration tests inside a `figment::Jail`.
//!
//! A jail gives each test a private working directory and environment, so
//! `augmentor.toml` files and `AUGMENTOR_*` variables never leak between
//! tests.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Writes `body` to `augmentor.toml` in the jail's working directory.
///
/// # Errors
///
/// Returns a figment error when the file cannot be created.
pub fn write_config(jail: &mut figment::Jail, body: &str) -> figment::error::Result<()> {
    jail.create_file("augmentor.toml", body).map(drop)
}

/// Converts any displayable error into a [`figment::Error`] so it can cross a
/// jail closure boundary.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers hand over owned errors from `map_err`"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
