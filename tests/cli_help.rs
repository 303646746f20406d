use std::process::Command;

fn devserve_bin() -> &'static str {
    env!("CARGO_BIN_EXE_devserve")
}

#[test]
fn help_lists_launch_flags() {
    let output = Command::new(devserve_bin())
        .arg("--help")
        .output()
        .expect("devserve should run");
    assert!(output.status.success(), "devserve --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["--root", "--entry", "--tags"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}

#[test]
fn help_documents_the_default_entry_and_tags() {
    let output = Command::new(devserve_bin())
        .arg("--help")
        .output()
        .expect("devserve should run");
    assert!(output.status.success(), "devserve --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["cmd/server/main.go", "debug"] {
        assert!(
            stdout.contains(needle),
            "--help should show default {needle}, got:\n{stdout}"
        );
    }
}

#[test]
fn version_output_uses_name_and_semver_format() {
    let output = Command::new(devserve_bin())
        .arg("--version")
        .output()
        .expect("devserve should run");
    assert!(output.status.success(), "devserve --version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let mut parts = stdout.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let version = parts.next().unwrap_or_default();
    let no_extra = parts.next().is_none();

    assert_eq!(name, "devserve", "unexpected binary name: {stdout}");
    assert!(
        version.chars().all(|c| c.is_ascii_digit() || c == '.') && version.split('.').count() == 3,
        "version should look like SemVer (X.Y.Z), got: {stdout}"
    );
    assert!(no_extra, "version output should be two tokens, got: {stdout}");
}

#[test]
fn rejects_root_that_is_not_a_directory() {
    let output = Command::new(devserve_bin())
        .args(["--root", "definitely/not/a/real/dir"])
        .output()
        .expect("devserve should run");
    assert!(!output.status.success(), "bad --root should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not a directory"),
        "stderr should explain the bad root, got:\n{stderr}"
    );
}
