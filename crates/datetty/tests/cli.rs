use assert_cmd::Command;

fn datetty() -> Command {
    Command::cargo_bin("datetty").expect("binary exists")
}

#[test]
fn test_help_prints_usage_and_format_examples() {
    // Arrange / Act
    let output = datetty().arg("--help").output().expect("command runs");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("2006-01-02"));
    assert!(stdout.contains("Layout token reference"));
}

#[test]
fn test_version_exits_zero() {
    // Arrange / Act
    let output = datetty().arg("--version").output().expect("command runs");

    // Assert
    assert!(output.status.success());
}

#[test]
fn test_rejects_template_with_wrong_year_literal() {
    // Arrange / Act
    let output = datetty()
        .args(["--format", "02.01.2001"])
        .output()
        .expect("command runs");

    // Assert
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("year token"));
    assert!(stderr.contains("--help"));
}

#[test]
fn test_rejects_empty_template() {
    // Arrange / Act
    let output = datetty()
        .args(["--format", ""])
        .output()
        .expect("command runs");

    // Assert
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty"));
}

#[test]
fn test_valid_template_without_a_tty_fails_cleanly() {
    // Arrange / Act — the test harness pipes stdio, so no session can start
    let output = datetty()
        .args(["--format", "2006-01-02"])
        .write_stdin("")
        .output()
        .expect("command runs");

    // Assert — environment error, and stdout stays empty
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("terminal"));
}
