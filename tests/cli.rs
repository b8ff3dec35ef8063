//! End-to-end tests of the `sparse-csr` binary

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sparse-csr"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

const A: &str = "%%MatrixMarket matrix coordinate real general\n3 3 3\n1 1 5\n2 2 3\n3 1 2\n";
const B: &str = "3 3 2\n1 1 1\n3 3 4\n";

const A_DUMP: &str = "Number of non-zeros: 3\n\
                      Row Pointer: 0 1 2 3 \n\
                      Column Index: 0 1 0 \n\
                      Values: 5.0000 3.0000 2.0000 \n";

#[test]
fn test_single_file_is_printed() {
    let a = write_temp(A);

    let output = run(&[a.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), A_DUMP);
}

#[test]
fn test_addition_prints_operands_and_result() {
    let a = write_temp(A);
    let b = write_temp(B);

    let output = run(&[
        a.path().to_str().unwrap(),
        b.path().to_str().unwrap(),
        "addition",
        "1",
    ]);

    assert!(output.status.success());
    let expected = format!(
        "{}{}{}",
        A_DUMP,
        "Number of non-zeros: 2\nRow Pointer: 0 1 1 2 \nColumn Index: 0 2 \nValues: 1.0000 4.0000 \n",
        "Number of non-zeros: 4\nRow Pointer: 0 1 2 4 \nColumn Index: 0 1 0 2 \n\
         Values: 6.0000 3.0000 2.0000 4.0000 \n"
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_print_flag_defaults_to_off() {
    let a = write_temp(A);
    let b = write_temp(B);

    for op in ["addition", "subtraction", "multiplication"] {
        let output = run(&[a.path().to_str().unwrap(), b.path().to_str().unwrap(), op]);
        assert!(output.status.success(), "{} failed: {}", op, stderr(&output));
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn test_non_numeric_print_flag_means_no_print() {
    let a = write_temp(A);
    let b = write_temp(B);

    let output = run(&[
        a.path().to_str().unwrap(),
        b.path().to_str().unwrap(),
        "addition",
        "yes",
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let output = run(&[a.path().to_str().unwrap(), "transpose", "1x"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with(A_DUMP));
}

#[test]
fn test_transpose_with_print() {
    let a = write_temp(A);

    let output = run(&[a.path().to_str().unwrap(), "transpose", "1"]);

    assert!(output.status.success());
    let expected = format!(
        "{}{}",
        A_DUMP,
        "Number of non-zeros: 3\nRow Pointer: 0 2 3 3 \nColumn Index: 0 2 1 \n\
         Values: 5.0000 2.0000 3.0000 \n"
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_unknown_operation_fails() {
    let a = write_temp(A);
    let b = write_temp(B);

    let output = run(&[
        a.path().to_str().unwrap(),
        b.path().to_str().unwrap(),
        "division",
        "0",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown operation: division"));
}

#[test]
fn test_wrong_argument_count_fails() {
    let a = write_temp(A);
    let path = a.path().to_str().unwrap();

    let output = run(&[path, path, "addition", "1", "extra"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid arguments."));
}

#[test]
fn test_missing_file_fails() {
    let output = run(&["/nonexistent/a.mtx"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("/nonexistent/a.mtx"));
}

#[test]
fn test_shape_mismatch_fails() {
    let a = write_temp(A);
    let wide = write_temp("2 5 1\n1 5 1.0\n");

    let output = run(&[
        a.path().to_str().unwrap(),
        wide.path().to_str().unwrap(),
        "addition",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("shape mismatch"));
}
