//! Output management and formatting.
//!
//! Results go to stdout through [`OutputManager`]; per-action notices go to
//! stderr through [`ConsoleReporter`] so that JSON on stdout stays parseable.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use twinskel_core::application::ActionReporter;
use twinskel_core::domain::ScaffoldAction;
use twinskel_core::error::{SkelError, SkelResult};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout.  Not suppressed by `--quiet`: asking
    /// for JSON is asking for output.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── ConsoleReporter ───────────────────────────────────────────────────────────

/// [`ActionReporter`] writing what-if and verbose notices to stderr.
pub struct ConsoleReporter {
    term: Term,
    quiet: bool,
    color: bool,
}

impl ConsoleReporter {
    pub fn new(output: &OutputManager) -> Self {
        Self {
            term: Term::stderr(),
            quiet: output.is_quiet(),
            color: output.supports_color() && io::stderr().is_terminal(),
        }
    }

    fn write(&self, line: &str) -> SkelResult<()> {
        self.term
            .write_line(line)
            .map_err(|e| SkelError::Internal {
                message: format!("failed to write to stderr: {e}"),
            })
    }
}

/// `Performing the operation "Create File" on target "app/.../App.scala".`
pub fn operation_line(action: &ScaffoldAction) -> String {
    format!(
        "Performing the operation \"{}\" on target \"{}\".",
        action.kind,
        action.target.display()
    )
}

impl ActionReporter for ConsoleReporter {
    fn describe(&self, action: &ScaffoldAction) -> SkelResult<()> {
        if self.quiet {
            return Ok(());
        }
        let prefix = if self.color {
            "VERBOSE:".dimmed().to_string()
        } else {
            "VERBOSE:".to_owned()
        };
        self.write(&format!("{prefix} {}", operation_line(action)))
    }

    fn simulate(&self, action: &ScaffoldAction) -> SkelResult<()> {
        if self.quiet {
            return Ok(());
        }
        let prefix = if self.color {
            "What if:".yellow().bold().to_string()
        } else {
            "What if:".to_owned()
        };
        self.write(&format!("{prefix} {}", operation_line(action)))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use twinskel_core::domain::{ScaffoldConfig, ScaffoldPlanner};

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_messages() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.success("hello").is_ok());
        assert!(out.is_quiet());
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        assert!(make_manager(false, false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, true, OutputFormat::Human).supports_color());
    }

    #[test]
    fn plain_and_json_never_color() {
        assert!(!make_manager(false, false, OutputFormat::Plain).supports_color());
        assert!(!make_manager(false, false, OutputFormat::Json).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn operation_line_names_kind_and_target() {
        let plan = ScaffoldPlanner::plan(&ScaffoldConfig::default()).unwrap();
        let [app_dir, _, app_file, _] = plan.actions();

        let line = operation_line(&app_dir);
        assert!(line.starts_with("Performing the operation \"Create Directory\" on target"));
        assert!(line.contains(&app_dir.target.display().to_string()));
        assert!(operation_line(&app_file).contains("\"Create File\""));
    }

    #[test]
    fn quiet_reporter_writes_nothing() {
        let reporter = ConsoleReporter::new(&make_manager(true, true, OutputFormat::Plain));
        let plan = ScaffoldPlanner::plan(&ScaffoldConfig::default()).unwrap();
        for action in plan.actions() {
            assert!(reporter.simulate(&action).is_ok());
            assert!(reporter.describe(&action).is_ok());
        }
    }
}
