//! CLI behavior tests for the to-doc binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary under test with config isolated from the developer's machine
fn to_doc(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("to-doc").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn test_pack_writes_default_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    fs::write(root.join("b.txt"), "world").unwrap();

    to_doc(temp_dir.path())
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing 2 files"));

    let output = root.join("project-llms.log");
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "a.txt\nhello\nb.txt\nworld\n");
}

#[test]
fn test_dry_mode_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hello\n").unwrap();

    to_doc(temp_dir.path())
        .arg(&root)
        .arg("--dry")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt (1 lines)"))
        .stdout(predicate::str::contains("Total files: 1"))
        .stdout(predicate::str::contains("Output file:"));

    // Only the input file exists afterwards
    let names: Vec<_> = fs::read_dir(&root)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("a.txt")]);
}

#[test]
fn test_invalid_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    to_doc(temp_dir.path())
        .arg(temp_dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_file_argument_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, "not a dir").unwrap();

    to_doc(temp_dir.path()).arg(&file).assert().failure();
}

#[test]
fn test_docignore_excludes_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("repo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join(".docignore"), "*.secret\n").unwrap();
    fs::write(root.join("keys.secret"), "hunter2\n").unwrap();
    fs::write(root.join("readme.md"), "docs\n").unwrap();

    to_doc(temp_dir.path()).arg(&root).assert().success();

    let content = fs::read_to_string(root.join("repo-llms.log")).unwrap();
    assert!(content.contains("readme.md"));
    assert!(!content.contains("keys.secret"));
    assert!(!content.contains("hunter2"));
}

#[test]
fn test_explicit_output_gets_log_extension() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("src");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();
    let output = temp_dir.path().join("context");

    to_doc(temp_dir.path())
        .arg(&root)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(temp_dir.path().join("context.log").is_file());
    assert!(!output.exists());
}

#[test]
fn test_exclude_flag_drops_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("mixed");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("app.py"), "print()\n").unwrap();
    fs::write(root.join("app.pyc"), "cached\n").unwrap();

    to_doc(temp_dir.path())
        .arg(&root)
        .args(["--exclude", "pyc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered out 1 files by extension"));

    let content = fs::read_to_string(root.join("mixed-llms.log")).unwrap();
    assert!(content.contains("app.py"));
    assert!(!content.contains("app.pyc"));
}

#[test]
fn test_max_lines_and_no_limit() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("sized");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("long.txt"), "x\n".repeat(20)).unwrap();
    fs::write(root.join("short.txt"), "y\n").unwrap();

    to_doc(temp_dir.path())
        .arg(&root)
        .args(["--max-lines", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing 1 files"));

    to_doc(temp_dir.path())
        .arg(&root)
        .arg("--no-limit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing 2 files"));
}

#[test]
fn test_rerun_output_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("stable");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "same\n").unwrap();

    to_doc(temp_dir.path()).arg(&root).assert().success();
    let first = fs::read(root.join("stable-llms.log")).unwrap();

    to_doc(temp_dir.path()).arg(&root).assert().success();
    let second = fs::read(root.join("stable-llms.log")).unwrap();

    assert_eq!(first, second);
    // The previous output file must not be packed into the new one
    assert!(!String::from_utf8(second).unwrap().contains("stable-llms.log"));
}

#[test]
fn test_quiet_suppresses_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("hushed");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hi\n").unwrap();

    to_doc(temp_dir.path())
        .arg(&root)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(root.join("hushed-llms.log").is_file());
}

#[test]
fn test_global_config_supplies_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("to-doc");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[filter]\nexclude = [\".pyc\"]\n",
    )
    .unwrap();

    let root = temp_dir.path().join("cfg");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("app.py"), "print()\n").unwrap();
    fs::write(root.join("app.pyc"), "cached\n").unwrap();

    to_doc(temp_dir.path()).arg(&root).assert().success();

    let content = fs::read_to_string(root.join("cfg-llms.log")).unwrap();
    assert!(content.contains("app.py"));
    assert!(!content.contains("app.pyc"));
}
