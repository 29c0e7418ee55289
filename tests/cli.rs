use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use walkdir::WalkDir;

fn run_binary(script: &Path, flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_a0")).args(flags)
                                          .arg(script)
                                          .output()
                                          .expect("failed to launch the a0 binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "a0"))
    {
        let script = entry.path();
        let expected =
            fs::read_to_string(script.with_extension("out")).unwrap_or_else(|e| {
                panic!("missing expected output for {script:?}: {e}")
            });

        let output = run_binary(script, &[]);
        assert!(output.status.success(),
                "script {script:?} failed:\n{}",
                String::from_utf8_lossy(&output.stderr));
        assert_eq!(stdout_of(&output), expected, "wrong output for {script:?}");

        count += 1;
    }

    assert!(count > 0, "no scripts found in tests/scripts");
}

#[test]
fn failing_scripts_exit_nonzero_with_a_diagnostic() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/errors").into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "a0"))
    {
        let script = entry.path();
        let output = run_binary(script, &[]);

        assert!(!output.status.success(),
                "script {script:?} unexpectedly succeeded");
        assert!(stdout_of(&output).contains("Error"),
                "no diagnostic for {script:?}: {}",
                stdout_of(&output));

        count += 1;
    }

    assert!(count > 0, "no scripts found in tests/errors");
}

#[test]
fn constant_reassignment_names_the_constant() {
    let output = run_binary(Path::new("tests/errors/constant.a0"), &[]);

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("constant") && stdout.contains('k'),
            "unexpected diagnostic: {stdout}");
}

#[test]
fn parse_errors_report_their_position() {
    let output = run_binary(Path::new("tests/errors/unterminated_string.a0"), &[]);

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Parse Error at ("), "unexpected diagnostic: {stdout}");
}

#[test]
fn tokens_flag_prints_the_token_list() {
    let output = run_binary(Path::new("tests/scripts/arithmetic.a0"), &["--tokens"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Int '1'"), "unexpected token list: {stdout}");
    assert!(stdout.contains("Eof"), "unexpected token list: {stdout}");
}

#[test]
fn ast_flag_prints_a_tree() {
    let output = run_binary(Path::new("tests/scripts/arithmetic.a0"), &["--ast"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("└── Program"), "unexpected tree: {stdout}");
    assert!(stdout.contains("BinaryExpr (Operator: +)"),
            "unexpected tree: {stdout}");
}

#[test]
fn missing_files_fail_with_a_message() {
    let output = run_binary(Path::new("tests/scripts/no_such_script.a0"), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}
