//! CLI integration tests.
//!
//! Runs the `astreg` binary and checks stdout, stderr and exit status.

use std::process::{Command, Output};

fn astreg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_astreg"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run astreg")
}

#[test]
fn test_no_arguments_prints_builtin_header() {
    let output = astreg(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("// This code is auto-generated by astreg, do not manually modify!!!\n"));
    assert!(stdout.contains("class NamespaceAccessExpr;\n"));
    assert!(stdout.contains("using ASTNodeVariant = std::variant<ASTNode const *, ProgramDecl const *,"));
    assert!(stdout.contains("namespace claire::parser {\n"));
    assert!(stdout.contains("  using Visitor<R, ASTNode, ProgramDecl,"));
    assert!(stdout.contains("R operator()(ASTNode const *) override {"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_repeated_runs_identical() {
    let first = astreg(&[]);
    let second = astreg(&[]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_rust_target() {
    let output = astreg(&["--target", "rust", "--kind", "ASTNode", "--kind", "ProgramDecl"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pub enum ASTNodeVariant<'a> {"));
    assert!(stdout.contains("fn visit_program_decl(&mut self, node: &ProgramDecl) -> R;"));
}

#[test]
fn test_duplicate_kind_fails_without_output() {
    let output = astreg(&["--kind", "A", "--kind", "A"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("registered twice"), "stderr: {}", stderr);
}

#[test]
fn test_reserved_kind_fails_without_output() {
    let output = astreg(&["--target", "rust", "--kind", "ASTNode", "--kind", "Self"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_kind_fails_without_output() {
    let output = astreg(&["--kind", "Not-An-Identifier"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_reserved_std_kind_fails_without_output() {
    let output = astreg(&["--kind", "ASTNode", "--kind", "std"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_options_fail_without_output() {
    let cases: [&[&str]; 4] = [
        &["--namespace", "not a namespace"],
        &["--namespace", "class"],
        &["--target", "rust", "--import-path", "crate::type"],
        &["--generator-name", "astreg\n#error"],
    ];
    for args in cases {
        let output = astreg(args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert!(output.stdout.is_empty(), "{:?}", args);
    }
}

#[test]
fn test_global_namespace() {
    let output = astreg(&["--namespace", ""]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("namespace"));
}

#[test]
fn test_emit_visitor_base_flag() {
    let without = String::from_utf8(astreg(&[]).stdout).unwrap();
    assert!(!without.contains("class Visitor<R, T>"));

    let output = astreg(&["--emit-visitor-base"]);
    assert!(output.status.success());
    let with = String::from_utf8(output.stdout).unwrap();
    assert!(with.contains("class Visitor<R, T, Rest...> : public Visitor<R, Rest...> {"));
}
