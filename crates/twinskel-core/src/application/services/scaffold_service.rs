//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the configuration
//! 2. Plan the four targets
//! 3. Process each action (report, simulate, confirm, create)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ActionReporter, Confirmer, Filesystem},
    },
    domain::{
        ActionKind, ActionStatus, DomainValidator as validator, ExecutionMode, ExecutionReport,
        ScaffoldAction, ScaffoldConfig, ScaffoldPlan, ScaffoldPlanner, SkipReason,
    },
    error::{SkelError, SkelResult},
};

/// Main scaffolding service.
///
/// Plans the skeleton and drives each action through the injected ports.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    confirmer: Box<dyn Confirmer>,
    reporter: Box<dyn ActionReporter>,
    root: PathBuf,
}

/// What to do with a single action once the mode gates have been applied.
enum Decision {
    Perform,
    Skip(SkipReason),
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Targets are resolved against the current directory unless
    /// [`ScaffoldService::with_root`] is used.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        confirmer: Box<dyn Confirmer>,
        reporter: Box<dyn ActionReporter>,
    ) -> Self {
        Self {
            filesystem,
            confirmer,
            reporter,
            root: PathBuf::new(),
        }
    }

    /// Resolve every target against `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate `config` and compute its plan. No I/O.
    pub fn plan(&self, config: &ScaffoldConfig) -> SkelResult<ScaffoldPlan> {
        validator::validate_config(config)?;
        Ok(ScaffoldPlanner::plan(config)?)
    }

    /// Plan and execute in one step.
    pub fn scaffold(&self, config: &ScaffoldConfig) -> SkelResult<ExecutionReport> {
        let plan = self.plan(config)?;
        self.execute(&plan, config)
    }

    /// Process the plan's four actions in order.
    ///
    /// Skipped actions do not stop the sequence. The first failing action
    /// aborts it with [`ApplicationError::ActionFailed`]; completed actions
    /// are not rolled back.
    #[instrument(
        skip_all,
        fields(
            root = %self.root.display(),
            confirm = config.flags().confirm,
            what_if = config.flags().what_if,
            verbose = config.flags().verbose,
        )
    )]
    pub fn execute(
        &self,
        plan: &ScaffoldPlan,
        config: &ScaffoldConfig,
    ) -> SkelResult<ExecutionReport> {
        info!(
            base_package = %config.base_package(),
            "Scaffolding app and lib modules"
        );

        let mut report = ExecutionReport::new();

        for action in plan.actions() {
            if config.flags().verbose {
                debug!(action = %action, "Processing action");
                self.reporter.describe(&action)?;
            }

            match self.decide(&action, config.mode())? {
                Decision::Skip(reason) => {
                    info!(label = action.label, %reason, "Action skipped");
                    report.record(action, ActionStatus::Skipped(reason));
                }
                Decision::Perform => match self.perform(&action) {
                    Ok(()) => {
                        info!(label = action.label, target = %action.target.display(), "Created");
                        report.record(action, ActionStatus::Created);
                    }
                    Err(e) => {
                        warn!(label = action.label, error = %e, "Action failed, aborting");
                        return Err(Self::abort(report, action, e));
                    }
                },
            }
        }

        info!(
            created = report.created_count(),
            skipped = report.skipped_count(),
            "Scaffold finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Apply the what-if and confirm gates.
    fn decide(&self, action: &ScaffoldAction, mode: ExecutionMode) -> SkelResult<Decision> {
        match mode {
            ExecutionMode::WhatIf => {
                self.reporter.simulate(action)?;
                Ok(Decision::Skip(SkipReason::Simulated))
            }
            ExecutionMode::Confirm => {
                if self.confirmer.confirm(&action.prompt())? {
                    Ok(Decision::Perform)
                } else {
                    Ok(Decision::Skip(SkipReason::Declined))
                }
            }
            ExecutionMode::Normal => Ok(Decision::Perform),
        }
    }

    /// Perform the filesystem mutation for one action.
    fn perform(&self, action: &ScaffoldAction) -> SkelResult<()> {
        let target = self.root.join(&action.target);
        match action.kind {
            ActionKind::CreateDirectory => {
                if self.filesystem.exists(&target) {
                    debug!(target = %target.display(), "Directory already present");
                }
                self.filesystem.create_dir_all(&target)
            }
            ActionKind::CreateFile => self.filesystem.write_file(&target, ""),
        }
    }

    /// Record the failure and wrap the partial report into the error.
    fn abort(mut report: ExecutionReport, action: ScaffoldAction, cause: SkelError) -> SkelError {
        let reason = match &cause {
            SkelError::Application(ApplicationError::FilesystemError { reason, .. }) => {
                reason.clone()
            }
            other => other.to_string(),
        };
        let label = action.label;
        let path = action.target.clone();
        report.record(action, ActionStatus::Failed(reason.clone()));

        ApplicationError::ActionFailed {
            label,
            path,
            reason,
            report: Box::new(report),
        }
        .into()
    }
}
