//! Integration tests for the twinskel binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const APP_DIR: &str = "app/src/main/scala/com/github/username/app";
const LIB_DIR: &str = "lib/src/main/scala/com/github/username/lib";

/// The binary, isolated from the user's config and environment.
fn twinskel(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("twinskel");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("TWINSKEL_CONFIG");
    cmd
}

fn under(root: &Path, rel: &str) -> PathBuf {
    rel.split('/').fold(root.to_path_buf(), |p, s| p.join(s))
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--what-if"))
        .stdout(predicate::str::contains("--confirm"))
        .stdout(predicate::str::contains("--base-package"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_run_creates_skeleton() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path()).assert().success();

    let app_file = under(temp.path(), &format!("{APP_DIR}/App.scala"));
    let lib_file = under(temp.path(), &format!("{LIB_DIR}/Lib.scala"));
    assert!(app_file.is_file());
    assert!(lib_file.is_file());
    assert_eq!(fs::read(&app_file).unwrap().len(), 0);
    assert_eq!(fs::read(&lib_file).unwrap().len(), 0);

    // only the two module trees appear
    assert_eq!(entries(temp.path()), 2);
    assert_eq!(entries(&under(temp.path(), APP_DIR)), 1);
}

#[test]
fn test_rerun_is_idempotent_and_truncates() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path()).assert().success();

    let app_file = under(temp.path(), &format!("{APP_DIR}/App.scala"));
    fs::write(&app_file, "object App").unwrap();

    twinskel(temp.path()).assert().success();
    assert_eq!(fs::read_to_string(&app_file).unwrap(), "");
    assert_eq!(entries(temp.path()), 2);
}

#[test]
fn test_what_if_creates_nothing() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("--what-if")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("What if: Performing the operation \"Create Directory\"")
                .count(2),
        )
        .stderr(
            predicate::str::contains("What if: Performing the operation \"Create File\"")
                .count(2),
        );

    assert_eq!(entries(temp.path()), 0);
}

#[test]
fn test_what_if_wins_over_confirm() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .args(["--confirm", "--dry-run"])
        .write_stdin("y\ny\ny\ny\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[y/N]").not());

    assert_eq!(entries(temp.path()), 0);
}

#[test]
fn test_confirm_declining_everything_creates_nothing() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("--confirm")
        .write_stdin("n\nn\nn\nn\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[y/N]").count(4));

    assert_eq!(entries(temp.path()), 0);
}

#[test]
fn test_confirm_with_closed_stdin_declines() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("--confirm")
        .write_stdin("")
        .assert()
        .success();

    assert_eq!(entries(temp.path()), 0);
}

#[test]
fn test_no_color_accepts_any_value() {
    for value in ["1", "true", "yes"] {
        let temp = TempDir::new().unwrap();
        twinskel(temp.path())
            .env("NO_COLOR", value)
            .arg("--what-if")
            .assert()
            .success();
    }
}

#[test]
fn test_confirm_non_utf8_answer_declines_and_continues() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("--confirm")
        .write_stdin(&b"\xff\ny\nn\ny\n"[..])
        .assert()
        .success()
        .stderr(predicate::str::contains("[y/N]").count(4));

    // app directory and app file declined, lib side created
    assert!(!temp.path().join("app").exists());
    assert!(under(temp.path(), &format!("{LIB_DIR}/Lib.scala")).is_file());
}

#[test]
fn test_confirm_partial_answers() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("--confirm")
        .write_stdin("y\nn\nY\nn\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Create app directory"));

    assert!(under(temp.path(), &format!("{APP_DIR}/App.scala")).is_file());
    assert!(!temp.path().join("lib").exists());
}

#[test]
fn test_custom_base_package_and_file_name() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .args(["--base-package", "org,example", "--app-file-name", "Main.ext"])
        .assert()
        .success();

    assert!(under(temp.path(), "app/src/main/scala/org/example/app/Main.ext").is_file());
    assert!(under(temp.path(), "lib/src/main/scala/org/example/lib/Lib.scala").is_file());
}

#[test]
fn test_output_dir() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .args(["-C", "out"])
        .assert()
        .success();

    assert!(under(temp.path(), &format!("out/{LIB_DIR}/Lib.scala")).is_file());
    assert_eq!(entries(temp.path()), 1);
}

#[test]
fn test_verbose_describes_each_action() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("VERBOSE: Performing the operation").count(4));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let assert = twinskel(temp.path())
        .args(["--output-format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["created"], 4);
    assert_eq!(value["skipped"], 0);
    assert_eq!(value["outcomes"][2]["action"]["label"], "app file");
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(
        &config,
        "[scaffold]\nsource_root = [\"src\"]\nbase_package = [\"net\", \"corp\"]\n",
    )
    .unwrap();

    twinskel(temp.path())
        .args(["--config", "custom.toml", "--lib-package", "core"])
        .assert()
        .success();

    assert!(under(temp.path(), "app/src/net/corp/app/App.scala").is_file());
    assert!(under(temp.path(), "lib/src/net/corp/core/Lib.scala").is_file());
}

#[test]
fn test_environment_overrides_config() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .env("TWINSKEL_SCAFFOLD__BASE_PACKAGE", "io,acme")
        .assert()
        .success();

    assert!(under(temp.path(), "app/src/main/scala/io/acme/app/App.scala").is_file());
}

#[test]
fn test_init_local_then_scaffold_uses_it() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".twinskel.toml"));

    let local = temp.path().join(".twinskel.toml");
    let edited = fs::read_to_string(&local)
        .unwrap()
        .replace("\"App.scala\"", "\"Entry.scala\"");
    fs::write(&local, edited).unwrap();

    twinskel(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    twinskel(temp.path()).assert().success();
    assert!(under(temp.path(), &format!("{APP_DIR}/Entry.scala")).is_file());
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();
    twinskel(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("twinskel"));
}
