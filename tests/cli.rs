use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

const EXPR_JAVA: &str = include_str!("fixtures/Expr.java");

fn generate_ast() -> Command {
    Command::cargo_bin("generate-ast").unwrap()
}

#[test]
fn writes_expr_java_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    generate_ast().arg(dir.path()).assert().success();

    let written = std::fs::read_to_string(dir.path().join("Expr.java")).unwrap();
    assert_eq!(written, EXPR_JAVA);
}

#[test]
fn rerun_overwrites_with_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("Expr.java");
    std::fs::write(&target, "stale").unwrap();

    generate_ast().arg(dir.path()).assert().success();
    let first = std::fs::read(&target).unwrap();
    generate_ast().arg(dir.path()).assert().success();
    let second = std::fs::read(&target).unwrap();

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), EXPR_JAVA);
}

#[test]
fn missing_directory_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    generate_ast()
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a directory, or does not exist"));

    assert!(!missing.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn file_instead_of_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    std::fs::write(&file, "keep me").unwrap();

    generate_ast()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration failed"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "keep me");
}

#[test]
fn unwritable_target_fails_with_output_stage() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("Expr.java")).unwrap();

    generate_ast()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("output failed"))
        .stderr(predicate::str::contains("Expr.java"));

    assert!(dir.path().join("Expr.java").is_dir());
}

#[test]
fn output_dir_argument_is_required() {
    generate_ast().assert().failure().stderr(predicate::str::contains("OUTPUT_DIR"));
}
