use std::process::Command;

#[test]
fn test_help_lists_target_flags() {
    let bin = env!("CARGO_BIN_EXE_archivist");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--docs", "--index", "--archives", "--limit", "--dry-run"] {
        assert!(
            stdout.contains(flag),
            "help output should mention {}; got:\n{}",
            flag,
            stdout
        );
    }
}

#[test]
fn test_unknown_flag_is_rejected() {
    let bin = env!("CARGO_BIN_EXE_archivist");

    let output = Command::new(bin).arg("--bogus").output().unwrap();

    assert!(!output.status.success());
}
