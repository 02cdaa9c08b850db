//! Helpers for loading layouts and configuration inside a `figment::Jail`.
//!
//! The jail gives each test a private working directory and environment, so
//! relative layout paths and `SETTING_GROUPS_` variables never leak between
//! tests.

use anyhow::{Result, anyhow};
use camino::Utf8Path;

/// File name used by [`with_layout_file`].
pub const LAYOUT_FILE: &str = "layout.toml";

/// Executes `f` inside a [`figment::Jail`] with a cleared environment.
///
/// # Errors
///
/// Returns an error if the jail cannot be initialised or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        jail.clear_env();
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Writes `layout` to [`LAYOUT_FILE`] in a fresh jail and runs `f` with its
/// relative path.
///
/// # Errors
///
/// Returns an error if the file cannot be written or `f` fails.
pub fn with_layout_file<F, T>(layout: &str, f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail, &Utf8Path) -> figment::error::Result<T>,
{
    with_jail(|jail| {
        jail.create_file(LAYOUT_FILE, layout)?;
        f(jail, Utf8Path::new(LAYOUT_FILE))
    })
}

/// Converts any displayable error into a [`figment::Error`] so library
/// failures can be propagated out of a jail closure with `?`.
pub fn jail_error<E: ToString>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}
