//! End-to-end tests for the ctt binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ctt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ctt").unwrap();
    // Keep the user's own ~/.config/ctt out of the search path.
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("CTT_CONFIG")
        .env_remove("CTT_VERBOSE")
        .arg("--no-color");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn test_tokens_plain() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "prog.ct", "500 0x500 0b1100 0 def\n");

    ctt(&dir)
        .args(["tokens", "prog.ct"])
        .assert()
        .success()
        .stdout("int(500)\nint(1280)\nint(12)\nint(0)\nkeyword(def)\n");
}

#[test]
fn test_tokens_from_stdin() {
    let dir = TempDir::new().unwrap();

    ctt(&dir)
        .arg("tokens")
        .write_stdin("  # comment\n500")
        .assert()
        .success()
        .stdout("int(500)\n");
}

#[test]
fn test_tokens_dash_reads_stdin() {
    let dir = TempDir::new().unwrap();

    ctt(&dir)
        .args(["tokens", "-", "--positions"])
        .write_stdin("!x")
        .assert()
        .success()
        .stdout("1:1\tkeyword(!)\n1:2\tident(x)\n");
}

#[test]
fn test_tokens_json() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "prog.ct", "struct p\n:= 0b2");

    let output = ctt(&dir)
        .args(["tokens", "prog.ct", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["value"], "struct");
    assert_eq!(items[2]["line"], 2);
    assert_eq!(items[3]["kind"], "invalid");
    assert_eq!(items[3]["value"], "no digits after base-2 prefix");
    assert_eq!(items[4]["value"], "2");
}

#[test]
fn test_tokens_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    ctt(&dir)
        .args(["tokens", "missing.ct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.ct"));
}

#[test]
fn test_config_file_sets_format() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "ctt.toml", "[output]\nformat = \"json\"\n");
    write_file(&dir, "prog.ct", "def");

    ctt(&dir)
        .args(["tokens", "prog.ct"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"keyword\""));
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "custom.toml", "[output]\npositions = true\n");
    write_file(&dir, "prog.ct", "def");

    ctt(&dir)
        .args(["--config", "custom.toml", "tokens", "prog.ct"])
        .assert()
        .success()
        .stdout("1:1\tkeyword(def)\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "prog.ct", "def");

    ctt(&dir)
        .args(["--config", "nope.toml", "tokens", "prog.ct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_check_clean() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "ok.ct", "def x := 1\nx == 0b1\n");

    ctt(&dir).args(["check", "ok.ct"]).assert().success();
}

#[test]
fn test_check_reports_invalid_tokens() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.ct", "def x\n  @ := 0x\n");

    ctt(&dir)
        .args(["check", "bad.ct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.ct:2:3: error: unrecognized symbol"))
        .stderr(predicate::str::contains(
            "bad.ct:2:8: error: no digits after base-16 prefix",
        ));
}

#[test]
fn test_check_max_errors() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.ct", "@ @ @");

    ctt(&dir)
        .args(["check", "bad.ct", "--max-errors", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.ct:1:1: error"))
        .stderr(predicate::str::contains("bad.ct:1:3: error").not())
        .stderr(predicate::str::contains("further errors not shown"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "prog.ct", "def");

    ctt(&dir)
        .args(["--verbose", "tokens", "prog.ct"])
        .assert()
        .success()
        .stdout("keyword(def)\n")
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_user_config_dir_is_searched() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join(".config").join("ctt");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("ctt.toml"), "[output]\npositions = true\n").unwrap();
    write_file(&dir, "prog.ct", "def");

    ctt(&dir)
        .args(["tokens", "prog.ct"])
        .assert()
        .success()
        .stdout("1:1\tkeyword(def)\n");
}

#[test]
fn test_check_diagnostics_not_duplicated_in_log() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.ct", "@");

    ctt(&dir)
        .args(["check", "bad.ct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.ct:1:1: error: unrecognized symbol"))
        .stderr(predicate::str::contains("WARN").not());
}
