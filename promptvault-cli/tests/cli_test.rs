//! End-to-end tests for the pvault binary
//!
//! Every test runs against its own store file and config directory so the
//! user's real configuration is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct TestEnv {
    home: TempDir,
    vault: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let vault = TempDir::new().unwrap();
        write(
            &vault.path().join("Work/code-review.md"),
            "---\nname: Code Review\n---\nReview this {{language}} code.\n{{> footer}}",
        );
        write(&vault.path().join("Work/broken.md"), "---\nname: [oops\n---\nBody");
        write(&vault.path().join("Personal/journal.md"), "Dear diary");

        Self {
            home: TempDir::new().unwrap(),
            vault,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pvault").unwrap();
        cmd.current_dir(self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join("config"))
            .env(
                "PROMPTVAULT_STORE__PATH",
                self.home.path().join("store.json"),
            )
            .env_remove("RUST_LOG");
        cmd
    }

    fn set_vault(&self) {
        self.cmd()
            .args(["vault", "set"])
            .arg(self.vault.path())
            .assert()
            .success();
    }
}

fn write(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_help() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault"))
        .stdout(predicate::str::contains("partial"));
}

#[test]
fn test_setup_required_exit_code() {
    let env = TestEnv::new();
    env.cmd().arg("folders").assert().code(3);
    env.cmd().arg("index").assert().code(3);
    env.cmd()
        .args(["vault", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No vault directory is configured"));
}

#[test]
fn test_vault_set_indexes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["vault", "set"])
        .arg(env.vault.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 folders and 3 prompts"));

    env.cmd()
        .args(["vault", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            fs::canonicalize(env.vault.path())
                .unwrap()
                .display()
                .to_string(),
        ));
}

#[test]
fn test_vault_set_rejects_missing_directory() {
    let env = TestEnv::new();
    env.cmd()
        .args(["vault", "set"])
        .arg(env.vault.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_folders_and_prompts_as_json() {
    let env = TestEnv::new();
    env.set_vault();

    let output = env
        .cmd()
        .args(["folders", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let folders: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let mut slugs: Vec<&str> = folders
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["slug"].as_str().unwrap())
        .collect();
    slugs.sort();
    assert_eq!(slugs, vec!["personal", "work"]);

    let output = env
        .cmd()
        .args(["prompts", "work", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let prompts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let broken = prompts
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["slug"] == "broken")
        .unwrap();
    assert!(broken["frontmatter_error"].is_string());
}

#[test]
fn test_unknown_folder_is_a_warning() {
    let env = TestEnv::new();
    env.set_vault();
    env.cmd()
        .args(["prompts", "nowhere"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Folder 'nowhere' not found"));
}

#[test]
fn test_show_renders_with_library() {
    let env = TestEnv::new();
    env.set_vault();

    env.cmd()
        .args(["var", "add", "language", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added variable 'language'"));
    env.cmd()
        .args(["partial", "add", "footer", "Keep it short."])
        .assert()
        .success();

    env.cmd()
        .args(["show", "work", "code-review", "--markup", "plain", "--refs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Review this Rust code."))
        .stdout(predicate::str::contains("Keep it short."))
        .stdout(predicate::str::contains("language"))
        .stdout(predicate::str::contains("footer"));
}

#[test]
fn test_show_html_markup_by_default() {
    let env = TestEnv::new();
    env.set_vault();

    env.cmd()
        .args(["show", "work", "code-review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pv-unresolved"));
}

#[test]
fn test_duplicate_variable_fails_and_keeps_value() {
    let env = TestEnv::new();
    env.cmd().args(["var", "add", "tone", "formal"]).assert().success();
    env.cmd()
        .args(["var", "add", "tone", "casual"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variable 'tone' already exists"));

    env.cmd()
        .args(["var", "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formal"))
        .stdout(predicate::str::contains("casual").not());
}

#[test]
fn test_delete_missing_partial_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["partial", "delete", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Partial 'ghost' not found"));
}

#[test]
fn test_var_update_and_delete() {
    let env = TestEnv::new();
    env.cmd().args(["var", "add", "tone", "formal"]).assert().success();
    env.cmd()
        .args(["var", "update", "tone", "casual"])
        .assert()
        .success();
    env.cmd()
        .args(["var", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("casual"));
    env.cmd().args(["var", "delete", "tone"]).assert().success();
    env.cmd()
        .args(["var", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No variables defined"));
}

#[test]
fn test_save_writes_and_reindexes() {
    let env = TestEnv::new();
    env.set_vault();

    let header = env.home.path().join("header.yaml");
    fs::write(&header, "name: Fresh Prompt\n").unwrap();
    let target = env.vault.path().join("Personal/fresh.md");

    env.cmd()
        .arg("save")
        .arg(&target)
        .arg("--frontmatter")
        .arg(&header)
        .write_stdin("Brand new body")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "---\nname: Fresh Prompt\n---\n\nBrand new body"
    );

    env.cmd()
        .args(["prompts", "personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh Prompt"));
}

#[test]
fn test_quiet_suppresses_status() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--quiet", "var", "add", "tone", "formal"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_vault_choose_without_terminal_needs_setup() {
    let env = TestEnv::new();
    env.cmd()
        .args(["vault", "choose"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No vault directory was selected"));
}
