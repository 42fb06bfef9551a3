//! Scaffold configuration.
//!
//! [`ScaffoldConfig`] is built once per invocation and is immutable
//! afterwards. Every field has a default, so `ScaffoldConfig::default()`
//! describes the standard skeleton.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    package_path::{PackagePath, validate_segment},
};

pub const DEFAULT_SOURCE_ROOT: [&str; 3] = ["src", "main", "scala"];
pub const DEFAULT_BASE_PACKAGE: [&str; 3] = ["com", "github", "username"];
pub const DEFAULT_APP_PACKAGE: [&str; 1] = ["app"];
pub const DEFAULT_LIB_PACKAGE: [&str; 1] = ["lib"];
pub const DEFAULT_APP_FILE_NAME: &str = "App.scala";
pub const DEFAULT_LIB_FILE_NAME: &str = "Lib.scala";

// ── Execution flags ───────────────────────────────────────────────────────────

/// The three independent mode switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionFlags {
    pub confirm: bool,
    pub what_if: bool,
    pub verbose: bool,
}

/// How actions are gated, derived from [`ExecutionFlags`].
///
/// `verbose` is orthogonal and does not appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Normal,
    Confirm,
    WhatIf,
}

impl ExecutionFlags {
    /// What-if wins over confirm: simulation never prompts.
    pub const fn mode(&self) -> ExecutionMode {
        if self.what_if {
            ExecutionMode::WhatIf
        } else if self.confirm {
            ExecutionMode::Confirm
        } else {
            ExecutionMode::Normal
        }
    }
}

// ── ScaffoldConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldConfig {
    source_root: PackagePath,
    base_package: PackagePath,
    app_package: PackagePath,
    lib_package: PackagePath,
    app_file_name: String,
    lib_file_name: String,
    flags: ExecutionFlags,
}

impl ScaffoldConfig {
    pub fn builder() -> ScaffoldConfigBuilder {
        ScaffoldConfigBuilder::default()
    }

    pub fn source_root(&self) -> &PackagePath {
        &self.source_root
    }

    pub fn base_package(&self) -> &PackagePath {
        &self.base_package
    }

    pub fn app_package(&self) -> &PackagePath {
        &self.app_package
    }

    pub fn lib_package(&self) -> &PackagePath {
        &self.lib_package
    }

    pub fn app_file_name(&self) -> &str {
        &self.app_file_name
    }

    pub fn lib_file_name(&self) -> &str {
        &self.lib_file_name
    }

    pub fn flags(&self) -> ExecutionFlags {
        self.flags
    }

    pub fn mode(&self) -> ExecutionMode {
        self.flags.mode()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_segment(&self.app_file_name)?;
        validate_segment(&self.lib_file_name)?;
        Ok(())
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_root: default_path(&DEFAULT_SOURCE_ROOT),
            base_package: default_path(&DEFAULT_BASE_PACKAGE),
            app_package: default_path(&DEFAULT_APP_PACKAGE),
            lib_package: default_path(&DEFAULT_LIB_PACKAGE),
            app_file_name: DEFAULT_APP_FILE_NAME.to_owned(),
            lib_file_name: DEFAULT_LIB_FILE_NAME.to_owned(),
            flags: ExecutionFlags::default(),
        }
    }
}

// The defaults are constant and valid, so no validation pass is needed.
fn default_path(segments: &[&str]) -> PackagePath {
    PackagePath::try_from(segments.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>())
        .unwrap_or_else(|e| unreachable!("built-in package path is invalid: {e}"))
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ScaffoldConfig`]; unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct ScaffoldConfigBuilder {
    source_root: Option<PackagePath>,
    base_package: Option<PackagePath>,
    app_package: Option<PackagePath>,
    lib_package: Option<PackagePath>,
    app_file_name: Option<String>,
    lib_file_name: Option<String>,
    flags: ExecutionFlags,
}

impl ScaffoldConfigBuilder {
    pub fn source_root(mut self, path: PackagePath) -> Self {
        self.source_root = Some(path);
        self
    }

    pub fn base_package(mut self, path: PackagePath) -> Self {
        self.base_package = Some(path);
        self
    }

    pub fn app_package(mut self, path: PackagePath) -> Self {
        self.app_package = Some(path);
        self
    }

    pub fn lib_package(mut self, path: PackagePath) -> Self {
        self.lib_package = Some(path);
        self
    }

    pub fn app_file_name(mut self, name: impl Into<String>) -> Self {
        self.app_file_name = Some(name.into());
        self
    }

    pub fn lib_file_name(mut self, name: impl Into<String>) -> Self {
        self.lib_file_name = Some(name.into());
        self
    }

    pub fn confirm(mut self, confirm: bool) -> Self {
        self.flags.confirm = confirm;
        self
    }

    pub fn what_if(mut self, what_if: bool) -> Self {
        self.flags.what_if = what_if;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.flags.verbose = verbose;
        self
    }

    pub fn flags(mut self, flags: ExecutionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Finish the configuration, rejecting file names that are not a single
    /// path component.
    pub fn build(self) -> Result<ScaffoldConfig, DomainError> {
        let defaults = ScaffoldConfig::default();
        let config = ScaffoldConfig {
            source_root: self.source_root.unwrap_or(defaults.source_root),
            base_package: self.base_package.unwrap_or(defaults.base_package),
            app_package: self.app_package.unwrap_or(defaults.app_package),
            lib_package: self.lib_package.unwrap_or(defaults.lib_package),
            app_file_name: self.app_file_name.unwrap_or(defaults.app_file_name),
            lib_file_name: self.lib_file_name.unwrap_or(defaults.lib_file_name),
            flags: self.flags,
        };
        config.validate()?;
        Ok(config)
    }
}
