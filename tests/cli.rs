use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::{fixture, rstest};
use std::path::Path;

#[fixture]
fn workspace() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    dir.child("left.txt")
        .write_str("a\nb\nc")
        .expect("Failed to write left.txt");
    dir.child("right.txt")
        .write_str("a\nx\nc")
        .expect("Failed to write right.txt");
    dir
}

fn run_linediff(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.env_remove("LINEDIFF_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    cmd.args(args);
    cmd
}

#[rstest]
#[case("positional", "  a\n- b\n+ x\n  c\n")]
#[case("split", "  a\n- b\n+ x\n  c\n")]
#[case("sequential", "  a\n- b\n+ x\n  c\n")]
fn print_body(workspace: TempDir, #[case] strategy: &str, #[case] expected: &str) {
    run_linediff(
        workspace.path(),
        &["left.txt", "right.txt", "--print", "--strategy", strategy],
    )
    .assert()
    .success()
    .stdout(expected.to_string());
}

#[rstest]
#[case("plain", "a\nb → x\nc\n")]
#[case("inline", "1: a\n2: - b\n2: + x\n3: c\n")]
#[case("stat", "2 unchanged, 0 added, 0 removed, 1 modified\n")]
fn print_positional_formats(workspace: TempDir, #[case] format: &str, #[case] expected: &str) {
    run_linediff(
        workspace.path(),
        &["left.txt", "right.txt", "--print", "--format", format],
    )
    .assert()
    .success()
    .stdout(expected.to_string());
}

#[rstest]
fn print_sequential_stat(workspace: TempDir) {
    run_linediff(
        workspace.path(),
        &[
            "left.txt",
            "right.txt",
            "-p",
            "-s",
            "unified",
            "-f",
            "stat",
        ],
    )
    .assert()
    .success()
    .stdout("2 unchanged, 1 added, 1 removed, 0 modified\n");
}

#[rstest]
fn print_export_with_language(workspace: TempDir) {
    run_linediff(
        workspace.path(),
        &[
            "left.txt",
            "right.txt",
            "--print",
            "--format",
            "export",
            "--language",
            "css",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("Code Comparison - "))
    .stdout(predicate::str::contains(
        "Language: css\n\n--- Original\n+++ Modified\n\n  a\n- b\n+ x\n  c\n",
    ));
}

#[rstest]
fn print_to_output_file(workspace: TempDir) {
    run_linediff(
        workspace.path(),
        &[
            "left.txt",
            "right.txt",
            "--print",
            "--format",
            "table",
            "--output",
            "diff.txt",
        ],
    )
    .assert()
    .success()
    .stdout("");

    let written = std::fs::read_to_string(workspace.path().join("diff.txt")).unwrap();
    pretty_assertions::assert_eq!(
        written,
        "Line | Text 1 | Text 2\n-----|--------|-------\n1 | a | a\n2 | b | x (DIFF)\n3 | c | c\n"
    );
}

#[rstest]
fn reads_one_side_from_stdin(workspace: TempDir) {
    run_linediff(workspace.path(), &["-", "right.txt", "--print"])
        .write_stdin("a\nb")
        .assert()
        .success()
        .stdout("  a\n- b\n+ x\n+ c\n");
}

#[rstest]
fn config_file_sets_strategy(workspace: TempDir) {
    workspace
        .child("linediff.toml")
        .write_str("strategy = \"sequential\"\nunknown_key = 1\n")
        .unwrap();

    run_linediff(
        workspace.path(),
        &["left.txt", "right.txt", "--print", "--format", "stat"],
    )
    .env("LINEDIFF_CONFIG", "linediff.toml")
    .assert()
    .success()
    .stdout("2 unchanged, 1 added, 1 removed, 0 modified\n")
    .stderr(predicate::str::contains("unknown_key"));
}

#[rstest]
fn flag_overrides_config(workspace: TempDir) {
    workspace
        .child("linediff.toml")
        .write_str("strategy = \"sequential\"\n")
        .unwrap();

    run_linediff(
        workspace.path(),
        &[
            "left.txt",
            "right.txt",
            "--config",
            "linediff.toml",
            "--strategy",
            "positional",
            "--print",
            "--format",
            "stat",
        ],
    )
    .assert()
    .success()
    .stdout("2 unchanged, 0 added, 0 removed, 1 modified\n");
}

#[rstest]
fn missing_input_fails(workspace: TempDir) {
    run_linediff(workspace.path(), &["left.txt", "nope.txt", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

#[rstest]
fn stdin_twice_fails(workspace: TempDir) {
    run_linediff(workspace.path(), &["-", "-", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one side"));
}

#[rstest]
fn invalid_theme_fails(workspace: TempDir) {
    workspace
        .child("linediff.toml")
        .write_str("theme = \"no-such-theme\"\n")
        .unwrap();

    run_linediff(
        workspace.path(),
        &["left.txt", "right.txt", "--config", "linediff.toml", "--print"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown theme"));
}
