//! Scaffold planning: configuration in, four concrete targets out.
//!
//! Planning is pure. It performs no I/O and the resulting paths are relative;
//! the executor resolves them against its output root.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{config::ScaffoldConfig, error::DomainError, package_path::join_segments};

/// Top-level directory of the application module.
pub const APP_MODULE: &str = "app";
/// Top-level directory of the library module.
pub const LIB_MODULE: &str = "lib";

// ── Actions ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CreateDirectory,
    CreateFile,
}

impl ActionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateDirectory => "Create Directory",
            Self::CreateFile => "Create File",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filesystem step of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldAction {
    pub kind: ActionKind,
    pub target: PathBuf,
    pub label: &'static str,
}

impl ScaffoldAction {
    fn directory(target: &Path, label: &'static str) -> Self {
        Self {
            kind: ActionKind::CreateDirectory,
            target: target.to_path_buf(),
            label,
        }
    }

    fn file(target: &Path, label: &'static str) -> Self {
        Self {
            kind: ActionKind::CreateFile,
            target: target.to_path_buf(),
            label,
        }
    }

    /// Yes/no question shown in confirm mode.
    pub fn prompt(&self) -> String {
        match self.kind {
            ActionKind::CreateDirectory => {
                format!("Create {} '{}'?", self.label, self.target.display())
            }
            ActionKind::CreateFile => {
                format!("Create empty {} '{}'?", self.label, self.target.display())
            }
        }
    }
}

/// `Create Directory "app/src/..." (app directory)`
impl fmt::Display for ScaffoldAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" ({})",
            self.kind,
            self.target.display(),
            self.label
        )
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// The four targets of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    app_dir: PathBuf,
    lib_dir: PathBuf,
    app_file: PathBuf,
    lib_file: PathBuf,
}

impl ScaffoldPlan {
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn lib_dir(&self) -> &Path {
        &self.lib_dir
    }

    pub fn app_file(&self) -> &Path {
        &self.app_file
    }

    pub fn lib_file(&self) -> &Path {
        &self.lib_file
    }

    /// Actions in execution order. Each file follows its directory.
    pub fn actions(&self) -> [ScaffoldAction; 4] {
        [
            ScaffoldAction::directory(&self.app_dir, "app directory"),
            ScaffoldAction::directory(&self.lib_dir, "lib directory"),
            ScaffoldAction::file(&self.app_file, "app file"),
            ScaffoldAction::file(&self.lib_file, "lib file"),
        ]
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

pub struct ScaffoldPlanner;

impl ScaffoldPlanner {
    /// Compute the scaffold targets for `config`.
    ///
    /// ```text
    /// app_dir  = app / <source_root> / <base_package> / <app_package>
    /// lib_dir  = lib / <source_root> / <base_package> / <lib_package>
    /// app_file = app_dir / <app_file_name>
    /// lib_file = lib_dir / <lib_file_name>
    /// ```
    pub fn plan(config: &ScaffoldConfig) -> Result<ScaffoldPlan, DomainError> {
        let shared = join_segments(
            config
                .source_root()
                .concat(config.base_package())
                .segments(),
        )?;

        let app_dir = Path::new(APP_MODULE)
            .join(&shared)
            .join(join_segments(config.app_package().segments())?);
        let lib_dir = Path::new(LIB_MODULE)
            .join(&shared)
            .join(join_segments(config.lib_package().segments())?);

        let app_file = app_dir.join(join_segments(&[config.app_file_name()])?);
        let lib_file = lib_dir.join(join_segments(&[config.lib_file_name()])?);

        Ok(ScaffoldPlan {
            app_dir,
            lib_dir,
            app_file,
            lib_file,
        })
    }
}
