//! Layered configuration for [`SettingGroupResolver`].
//!
//! Values are gathered with `figment`: built-in defaults, then an optional
//! TOML file, then environment variables prefixed with [`ENV_PREFIX`]
//! (for example `SETTING_GROUPS_PATH_POOL_CAPACITY=8`).

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::{GroupError, GroupResult, SettingGroupResolver};

/// Prefix for environment variables read by [`ResolverConfig::load`].
pub const ENV_PREFIX: &str = "SETTING_GROUPS_";

/// Largest accepted [`ResolverConfig::path_capacity_hint`].
///
/// [`ResolverConfig::load`] rejects larger values and resolvers built
/// directly from a config clamp to it.
pub const MAX_PATH_CAPACITY_HINT: usize = 4096;

/// Tuning knobs for the resolver's path-buffer pool.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of idle path buffers kept between calls. Zero disables
    /// pooling.
    pub path_pool_capacity: usize,
    /// Initial capacity of a freshly allocated path buffer, at most
    /// [`MAX_PATH_CAPACITY_HINT`].
    pub path_capacity_hint: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            path_pool_capacity: 4,
            path_capacity_hint: 16,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from defaults, `file` and the environment.
    ///
    /// Later layers override earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Config`] when `file` is given but missing, when
    /// any layer holds a value of the wrong type, or when
    /// `path_capacity_hint` exceeds [`MAX_PATH_CAPACITY_HINT`].
    pub fn load(file: Option<&Utf8Path>) -> GroupResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            if !path.is_file() {
                return Err(GroupError::config(figment::Error::from(format!(
                    "configuration file '{path}' does not exist"
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(GroupError::config)?;
        if config.path_capacity_hint > MAX_PATH_CAPACITY_HINT {
            return Err(GroupError::config(figment::Error::from(format!(
                "path_capacity_hint {} exceeds the maximum of {MAX_PATH_CAPACITY_HINT}",
                config.path_capacity_hint
            ))));
        }
        tracing::debug!(
            pool_capacity = config.path_pool_capacity,
            capacity_hint = config.path_capacity_hint,
            "loaded resolver configuration"
        );
        Ok(config)
    }

    /// Build a resolver sized by this configuration.
    #[must_use]
    pub fn resolver(&self) -> SettingGroupResolver {
        SettingGroupResolver::with_config(self)
    }
}
