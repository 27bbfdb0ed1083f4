//! End-to-end tests for the `mbaflow` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the host's settings and environment.
fn mbaflow(dir: &Path) -> Command {
    let settings = dir.join("settings.toml");
    if !settings.exists() {
        fs::write(&settings, "").unwrap();
    }

    let mut cmd = Command::cargo_bin("mbaflow").unwrap();
    cmd.current_dir(dir)
        .env_remove("MBA_COURSES_DIR")
        .env_remove("UNIVERSITY_NAME")
        .env_remove("DEFAULT_WORK_DIR")
        .env_remove("MBAFLOW_EDITOR")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&settings);
    cmd
}

fn project_root(base: &Path, dir_name: &str) -> PathBuf {
    base.join("MBA Assignment Workflow System").join(dir_name)
}

// folder, number, name, due, pages, sources, type, charts, tables, open, frameworks
const FULL_ANSWERS: &str = "1\n03\nacme\n2026-11-30\n8\n12\nIndustry Analysis\ny\ny\nn\n2,4\n";

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    mbaflow(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("frameworks"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    mbaflow(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_creates_project_in_current_directory() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .arg("new")
        .write_stdin(FULL_ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Select folder (1-2): "))
        .stdout(predicate::str::contains("Location: "))
        .stdout(predicate::str::contains("Frameworks: SWOT Analysis, PESTEL Analysis"))
        .stdout(predicate::str::contains("Charts/graphs: Enabled"))
        .stdout(predicate::str::contains("Data tables: Enabled"))
        .stdout(predicate::str::contains("5. Run AGENT 1 in Claude Code"));

    let root = project_root(temp.path(), "assignment03-acme");
    for folder in [
        "01-planning",
        "02-sources/academic/files",
        "02-sources/academic/analysis",
        "02-sources/industry/files",
        "02-sources/industry/analysis",
        "03-frameworks/individual",
        "04-writing",
        "04-writing/visuals",
        "05-final",
    ] {
        assert!(root.join(folder).is_dir(), "missing {folder}");
    }

    let instructions = fs::read_to_string(root.join("01-planning/instructions.md")).unwrap();
    for field in ["03", "acme", "2026-11-30", "8", "12", "SWOT Analysis, PESTEL Analysis"] {
        assert!(instructions.contains(field), "instructions lack {field}");
    }

    let workflow = fs::read_to_string(root.join("01-planning/CLAUDE.md")).unwrap();
    assert!(workflow.contains("5. Create charts/graphs in `04-writing/visuals/`"));
    assert!(workflow.contains("6. Create data tables in `04-writing/visuals/`"));
}

#[test]
fn empty_name_aborts_without_side_effects() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .arg("new")
        .write_stdin("1\n01\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assignment name is required!"));

    assert!(!temp.path().join("MBA Assignment Workflow System").exists());
}

#[test]
fn blank_answers_use_defaults() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .arg("new")
        .write_stdin("\n\nquick\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Due: [Add due date]"))
        .stdout(predicate::str::contains("SWOT Analysis, Porter's Five Forces"));

    let root = project_root(temp.path(), "assignment01-quick");
    assert!(root.join("05-final").is_dir());
    assert!(!root.join("04-writing/visuals").exists());
}

#[test]
fn rerun_keeps_existing_files() {
    let temp = TempDir::new().unwrap();
    mbaflow(temp.path())
        .arg("new")
        .write_stdin(FULL_ANSWERS)
        .assert()
        .success();

    let notes = project_root(temp.path(), "assignment03-acme").join("05-final/notes.md");
    fs::write(&notes, "draft").unwrap();

    mbaflow(temp.path())
        .arg("new")
        .write_stdin(FULL_ANSWERS)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(notes).unwrap(), "draft");
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .args(["new", "--dry-run"])
        .write_stdin(FULL_ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: would create"))
        .stdout(predicate::str::contains("04-writing/visuals/"))
        .stdout(predicate::str::contains("01-planning/CLAUDE.md"));

    assert!(!temp.path().join("MBA Assignment Workflow System").exists());
}

#[test]
fn missing_custom_folder_exits_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nowhere");

    mbaflow(temp.path())
        .arg("new")
        .write_stdin(format!("2\n{}\n01\nx\n", missing.display()))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Target folder does not exist"));

    assert!(!missing.exists());
}

#[test]
fn courses_dir_subfolders_are_offered() {
    let temp = TempDir::new().unwrap();
    let courses = temp.path().join("courses");
    fs::create_dir_all(courses.join("strategy")).unwrap();

    // 1 cwd, 2 courses, 3 courses/strategy, 4 custom
    mbaflow(temp.path())
        .env("MBA_COURSES_DIR", &courses)
        .arg("new")
        .write_stdin("3\n01\nmarket\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select folder (1-4): "))
        .stdout(predicate::str::contains("No MBA_COURSES_DIR").not());

    assert!(project_root(&courses.join("strategy"), "assignment01-market").is_dir());
}

#[test]
fn failed_editor_is_a_warning() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .args(["new", "--editor", "mbaflow-no-such-editor"])
        .write_stdin("1\n01\nedit\n\n\n\n\nn\nn\ny\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not open mbaflow-no-such-editor automatically"))
        .stdout(predicate::str::contains("Manual command: mbaflow-no-such-editor '"))
        .stdout(predicate::str::contains("5. Run AGENT 1 in Claude Code"));
}

#[test]
fn new_json_summary() {
    let temp = TempDir::new().unwrap();

    let assert = mbaflow(temp.path())
        .args(["--output-format", "json", "new"])
        .write_stdin(FULL_ANSWERS)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["project"]["assignment_name"], "acme");
    assert_eq!(value["folders"].as_array().unwrap().len(), 9);
}

#[test]
fn json_abort_keeps_stdout_clean() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .args(["--output-format", "json", "new"])
        .write_stdin("1\n01\n\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Assignment name is required!"));
}

#[test]
fn frameworks_json_uses_display_names() {
    let temp = TempDir::new().unwrap();

    let assert = mbaflow(temp.path())
        .args(["frameworks", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["name"], "Porter's Five Forces");
    assert_eq!(entries[6]["name"], "McKinsey 7S");
}

#[test]
fn unknown_framework_is_user_error() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .args(["frameworks", "balanced-scorecard"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("balanced-scorecard"));
}

#[test]
fn config_get_reads_environment() {
    let temp = TempDir::new().unwrap();

    mbaflow(temp.path())
        .env("UNIVERSITY_NAME", "Wharton")
        .args(["config", "get", "workspace.university_name"])
        .assert()
        .success()
        .stdout("Wharton\n");
}

#[test]
fn malformed_settings_exit_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("settings.toml"), "[workspace\n").unwrap();

    mbaflow(temp.path())
        .args(["frameworks"])
        .assert()
        .code(4);
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let temp = TempDir::new().unwrap();
    mbaflow(temp.path()).arg("bogus").assert().code(2);
}
