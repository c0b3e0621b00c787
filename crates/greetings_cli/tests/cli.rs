use std::process::Command;

/// Run the greetings binary with the given arguments.
fn run_greetings(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_greetings"))
        .args(args)
        .output()
        .expect("failed to spawn greetings binary")
}

#[test]
fn test_empty_name_prints_fatal_line_and_exits_nonzero() {
    let output = run_greetings(&[""]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, "greetings: empty name\n");
}

#[test]
fn test_single_name_prints_greeting() {
    let output = run_greetings(&["Gladys"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = [
        "Hi, Gladys. Welcome!",
        "Great to see you, Gladys!",
        "Hail, Gladys! Well met!",
    ];
    assert!(
        expected.iter().any(|greeting| stdout.contains(greeting)),
        "unexpected output: {}",
        stdout
    );
}

#[test]
fn test_no_arguments_greets_default_trio() {
    let output = run_greetings(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["Gladys", "Samantha", "Darrin"] {
        assert!(stdout.contains(name), "missing {} in output: {}", name, stdout);
    }
}

#[test]
fn test_batch_with_empty_name_fails() {
    let output = run_greetings(&["Gladys", "", "Darrin"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, "greetings: empty name\n");
}
