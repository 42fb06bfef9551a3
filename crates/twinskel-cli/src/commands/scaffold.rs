//! The default action: create the app/lib skeleton.
//!
//! Responsibility: merge CLI flags over the loaded configuration, run the
//! core scaffold service, and display the report. No business logic lives
//! here.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use twinskel_adapters::{ConsoleConfirmer, LocalFilesystem};
use twinskel_core::{
    application::ScaffoldService,
    domain::{ActionOutcome, ActionStatus, ExecutionReport, PackagePath, ScaffoldConfig, SkipReason},
    error::SkelError,
};

use crate::{
    cli::{GlobalArgs, OutputFormat, ScaffoldArgs},
    config::AppConfig,
    error::CliResult,
    output::{ConsoleReporter, OutputManager},
};

/// Execute the scaffold run.
///
/// 1. Build a [`ScaffoldConfig`] (flags win over config values)
/// 2. Plan and validate, before anything touches the filesystem
/// 3. Execute the four actions
/// 4. Render the report
#[instrument(skip_all, fields(output_dir = %args.output_dir.display()))]
pub fn execute(
    args: ScaffoldArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scaffold_config = build_config(&args, &global, &config)?;
    debug!(
        base_package = %scaffold_config.base_package(),
        app_package = %scaffold_config.app_package(),
        lib_package = %scaffold_config.lib_package(),
        mode = ?scaffold_config.mode(),
        "Scaffold configuration resolved"
    );

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleConfirmer::stdio()),
        Box::new(ConsoleReporter::new(&output)),
    )
    .with_root(&args.output_dir);

    let plan = service.plan(&scaffold_config)?;
    let report = service.execute(&plan, &scaffold_config)?;

    match output.format() {
        OutputFormat::Json => output.json(&JsonReport::new(&args.output_dir, &report))?,
        _ => render(&report, &output)?,
    }

    Ok(())
}

/// Merge CLI flags over the configured defaults.
pub fn build_config(
    args: &ScaffoldArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<ScaffoldConfig> {
    let defaults = &config.scaffold;

    let package = |field: &'static str, flag: &Option<Vec<String>>, fallback: &Vec<String>| {
        PackagePath::for_field(field, flag.clone().unwrap_or_else(|| fallback.clone()))
            .map_err(SkelError::from)
    };

    let built = ScaffoldConfig::builder()
        .source_root(package("source root", &None, &defaults.source_root)?)
        .base_package(package("base package", &args.base_package, &defaults.base_package)?)
        .app_package(package("app package", &args.app_package, &defaults.app_package)?)
        .lib_package(package("lib package", &args.lib_package, &defaults.lib_package)?)
        .app_file_name(
            args.app_file_name
                .clone()
                .unwrap_or_else(|| defaults.app_file_name.clone()),
        )
        .lib_file_name(
            args.lib_file_name
                .clone()
                .unwrap_or_else(|| defaults.lib_file_name.clone()),
        )
        .confirm(args.confirm)
        .what_if(args.what_if)
        .verbose(global.describes_actions())
        .build()
        .map_err(SkelError::from)?;

    Ok(built)
}

/// Human/plain rendering: one line per created or declined action, then a
/// summary.  Simulated actions were already announced on stderr.
fn render(report: &ExecutionReport, output: &OutputManager) -> std::io::Result<()> {
    for outcome in report.outcomes() {
        match &outcome.status {
            ActionStatus::Created => output.success(&format!(
                "Created {}: {}",
                outcome.action.label,
                outcome.action.target.display()
            ))?,
            ActionStatus::Skipped(SkipReason::Declined) => output.warning(&format!(
                "Skipped {}: {}",
                outcome.action.label,
                outcome.action.target.display()
            ))?,
            ActionStatus::Skipped(SkipReason::Simulated) | ActionStatus::Failed(_) => {}
        }
    }

    output.info(&summary(report))
}

fn summary(report: &ExecutionReport) -> String {
    let simulated = report
        .statuses()
        .filter(|s| matches!(s, ActionStatus::Skipped(SkipReason::Simulated)))
        .count();
    if simulated == report.len() {
        return format!("What if: {simulated} actions reported, nothing was created");
    }
    format!(
        "{} of {} actions performed, {} skipped",
        report.created_count(),
        report.len(),
        report.skipped_count()
    )
}

/// Shape of `--output-format json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    created: usize,
    skipped: usize,
    outcomes: &'a [ActionOutcome],
}

impl<'a> JsonReport<'a> {
    fn new(root: &'a Path, report: &'a ExecutionReport) -> Self {
        Self {
            root,
            created: report.created_count(),
            skipped: report.skipped_count(),
            outcomes: report.outcomes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use clap::Parser;
    use twinskel_core::domain::{ScaffoldPlanner, join_segments};

    use crate::cli::Cli;

    fn config_from(args: &[&str], config: &AppConfig) -> CliResult<ScaffoldConfig> {
        let cli = Cli::try_parse_from(std::iter::once("twinskel").chain(args.iter().copied()))
            .unwrap();
        build_config(&cli.scaffold, &cli.global, config)
    }

    #[test]
    fn no_flags_use_defaults() {
        let built = config_from(&[], &AppConfig::default()).unwrap();
        assert_eq!(built, ScaffoldConfig::default());
    }

    #[test]
    fn flags_override_config_values() {
        let mut config = AppConfig::default();
        config.scaffold.base_package = vec!["net".into(), "corp".into()];
        config.scaffold.app_file_name = "Server.scala".into();

        let built = config_from(&["--base-package", "org,example"], &config).unwrap();
        assert_eq!(built.base_package().segments(), ["org", "example"]);
        assert_eq!(built.app_file_name(), "Server.scala");
    }

    #[test]
    fn source_root_comes_from_config() {
        let mut config = AppConfig::default();
        config.scaffold.source_root = vec!["src".into()];

        let built = config_from(&[], &config).unwrap();
        let plan = ScaffoldPlanner::plan(&built).unwrap();
        assert_eq!(
            plan.lib_dir(),
            join_segments(&["lib", "src", "com", "github", "username", "lib"]).unwrap()
        );
    }

    #[test]
    fn flags_set_execution_mode() {
        let built = config_from(&["--confirm", "--what-if", "-v"], &AppConfig::default()).unwrap();
        let flags = built.flags();
        assert!(flags.confirm && flags.what_if && flags.verbose);
    }

    #[test]
    fn invalid_segment_is_rejected_before_planning() {
        let err = config_from(&["--lib-package", "a/b"], &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_config_list_is_rejected() {
        let mut config = AppConfig::default();
        config.scaffold.app_package.clear();
        assert!(config_from(&[], &config).is_err());
    }

    #[test]
    fn summary_for_what_if_run() {
        let plan = ScaffoldPlanner::plan(&ScaffoldConfig::default()).unwrap();
        let mut report = ExecutionReport::new();
        for action in plan.actions() {
            report.record(action, ActionStatus::Skipped(SkipReason::Simulated));
        }
        assert!(summary(&report).contains("nothing was created"));
    }

    #[test]
    fn json_report_lists_outcomes() {
        let plan = ScaffoldPlanner::plan(&ScaffoldConfig::default()).unwrap();
        let mut report = ExecutionReport::new();
        for action in plan.actions() {
            report.record(action, ActionStatus::Created);
        }
        let root = PathBuf::from("out");
        let value = serde_json::to_value(JsonReport::new(&root, &report)).unwrap();

        assert_eq!(value["created"], 4);
        assert_eq!(value["outcomes"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["outcomes"][0]["status"]["status"], "created");
        assert_eq!(value["outcomes"][0]["action"]["kind"], "create_directory");
    }
}
