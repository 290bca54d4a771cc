use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TRANSCRIPT: &str = "--- Page 1 ---\nBILL OF LADING\nB/L No: ABC1234567\nRef XYZ7654321\n";

fn blref(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("blref").unwrap();
    cmd.env("BLREF_CONFIG_DIR", config_dir);
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn extract_prints_ranked_json() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "bl.txt", TRANSCRIPT);

    blref(dir.path())
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""blNumbers":["ABC1234567","XYZ7654321"]"#,
        ))
        .stdout(predicate::str::contains(r#""blNumberCount":2"#))
        .stdout(predicate::str::contains(r#""primary":"ABC1234567""#));
}

#[test]
fn extract_text_format_from_stdin() {
    let dir = TempDir::new().unwrap();

    blref(dir.path())
        .args(["extract", "-", "--format", "text"])
        .write_stdin("HAWB No. AEBDEL36\n")
        .assert()
        .success()
        .stdout("=== Extracted B/L numbers (by priority) ===\n1. AEBDEL36\n");
}

#[test]
fn extract_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "bl.txt", TRANSCRIPT);
    let output = dir.path().join("out.csv");

    blref(dir.path())
        .arg("extract")
        .arg(&input)
        .args(["--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "rank,value,score,from_label\n1,ABC1234567,5,true\n2,XYZ7654321,3,false\n"
    );
}

#[test]
fn extract_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    blref(dir.path())
        .args(["extract", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn primary_prints_best_or_sentinel() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "bl.txt", TRANSCRIPT);

    blref(dir.path())
        .arg("primary")
        .arg(&input)
        .assert()
        .success()
        .stdout("ABC1234567\n");

    blref(dir.path())
        .args(["primary", "-"])
        .write_stdin("random digits 1234567890")
        .assert()
        .success()
        .stdout("B/L number not found\n");
}

#[test]
fn primary_require_fails_when_missing() {
    let dir = TempDir::new().unwrap();

    blref(dir.path())
        .args(["primary", "-", "--require"])
        .write_stdin("Container ABCD1234567")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No B/L number found"));
}

#[test]
fn debug_shows_both_passes() {
    let dir = TempDir::new().unwrap();

    blref(dir.path())
        .args(["debug", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== LABEL pattern ==="))
        .stdout(predicate::str::contains("=== GLOBAL pattern ==="))
        .stdout(predicate::str::contains("no match"));

    blref(dir.path())
        .args(["debug", "-"])
        .write_stdin("B/L No: MI/24/304058")
        .assert()
        .success()
        .stdout(predicate::str::contains("value: MI/24/304058"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let inputs = TempDir::new().unwrap();
    write(&inputs, "a.txt", TRANSCRIPT);
    write(&inputs, "b.txt", "nothing to see");
    write(&inputs, "c.pdf", "B/L No: MI/24/304058");
    let out = dir.path().join("out");

    blref(dir.path())
        .arg("batch")
        .arg(format!("{}/*", inputs.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .args(["--summary", "--primary-only", "-j", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "ABC1234567\n");
    assert_eq!(
        fs::read_to_string(out.join("b.txt")).unwrap(),
        "B/L number not found\n"
    );
    assert!(!out.join("c.txt").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    let rows: Vec<&str> = summary.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("1,a.txt,found,ABC1234567,2,"));
    assert!(rows[2].starts_with("2,b.txt,not_found,B/L number not found,0,"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();

    blref(dir.path())
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn config_set_is_used_by_extract() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "bl.txt", TRANSCRIPT);

    blref(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));

    blref(dir.path())
        .args(["config", "set", "extraction.max_candidates", "1"])
        .assert()
        .success();

    blref(dir.path())
        .args(["config", "get", "extraction.max_candidates"])
        .assert()
        .success()
        .stdout("1\n");

    blref(dir.path())
        .args(["extract", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout("=== Extracted B/L numbers (by priority) ===\n1. ABC1234567\n");
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");

    blref(dir.path())
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    blref(dir.path())
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn primary_reads_stdin_with_unbounded_size_limit() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.json",
        r#"{"input":{"extensions":["txt"],"max_file_size":18446744073709551615}}"#,
    );

    blref(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["primary", "-"])
        .write_stdin("B/L No: MI/24/304058\n")
        .assert()
        .success()
        .stdout("MI24304058\n");
}
