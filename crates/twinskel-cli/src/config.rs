//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`ScaffoldConfig`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `TWINSKEL_<SECTION>__<KEY>`
//! 3. The file named by `--config` / `TWINSKEL_CONFIG` (must exist)
//! 4. `.twinskel.toml` in the current directory
//! 5. The user config file, see [`AppConfig::config_path`]
//! 6. Built-in defaults (always present)
//!
//! [`ScaffoldConfig`]: twinskel_core::domain::ScaffoldConfig

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use twinskel_core::domain::config::{
    DEFAULT_APP_FILE_NAME, DEFAULT_APP_PACKAGE, DEFAULT_BASE_PACKAGE, DEFAULT_LIB_FILE_NAME,
    DEFAULT_LIB_PACKAGE, DEFAULT_SOURCE_ROOT,
};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".twinskel.toml";

const ENV_PREFIX: &str = "TWINSKEL";

/// Keys whose environment value is a comma-separated list.
const LIST_KEYS: [&str; 4] = [
    "scaffold.source_root",
    "scaffold.base_package",
    "scaffold.app_package",
    "scaffold.lib_package",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Skeleton defaults, overridden by CLI flags.
    pub scaffold: ScaffoldDefaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldDefaults {
    /// Segments between the module directory and the base package.
    /// Only settable here; there is no flag for it.
    pub source_root: Vec<String>,
    pub base_package: Vec<String>,
    pub app_package: Vec<String>,
    pub lib_package: Vec<String>,
    pub app_file_name: String,
    pub lib_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        fn owned(segments: &[&str]) -> Vec<String> {
            segments.iter().map(|s| (*s).to_owned()).collect()
        }

        Self {
            source_root: owned(&DEFAULT_SOURCE_ROOT),
            base_package: owned(&DEFAULT_BASE_PACKAGE),
            app_package: owned(&DEFAULT_APP_PACKAGE),
            lib_package: owned(&DEFAULT_LIB_PACKAGE),
            app_file_name: DEFAULT_APP_FILE_NAME.to_owned(),
            lib_file_name: DEFAULT_LIB_FILE_NAME.to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every source in priority order.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// implicit locations it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut files = vec![
            (Self::config_path(), false),
            (PathBuf::from(LOCAL_CONFIG_FILE), false),
        ];
        if let Some(path) = config_file {
            files.push((path.clone(), true));
        }
        Self::load_from(&files, Some(ENV_PREFIX))
    }

    /// Layer defaults, the given `(path, required)` TOML files in order, and
    /// optionally the environment under `env_prefix`.
    pub fn load_from(files: &[(PathBuf, bool)], env_prefix: Option<&str>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?,
        );

        for (path, required) in files {
            debug!(path = %path.display(), required, "config file source");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        if let Some(prefix) = env_prefix {
            let mut env = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .try_parsing(true);
            for key in LIST_KEYS {
                env = env.with_list_parse_key(key);
            }
            builder = builder.add_source(env);
        }

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.twinskel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "twinskel", "twinskel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Serialise to the TOML written by `twinskel init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// `true` if `path` already holds a config file.
    pub fn exists_at(path: &Path) -> bool {
        path.is_file()
    }
}
