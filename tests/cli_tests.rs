//! CLI integration tests using the real kodegen_bundle_arch binary

mod common;

use assert_cmd::Command;
use common::{AppsDir, FAT, MACHO_32, MACHO_64};
use predicates::prelude::*;

#[allow(deprecated)]
fn arch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundle_arch").unwrap();
    // Keep the default log filter regardless of the developer environment
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("KODEGEN_APPS_DIR");
    cmd
}

fn stdout_of(apps: &AppsDir) -> (String, String) {
    let output = arch_cmd().arg(apps.path()).output().unwrap();
    assert!(output.status.success());
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_help_output() {
    arch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ROOT"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_apple_silicon_bundle_listed_once() {
    let apps = AppsDir::new();
    apps.bundle("A.app", "A", Some(&MACHO_64));

    let (stdout, stderr) = stdout_of(&apps);
    assert_eq!(
        stdout,
        "\nIntel (x86_64) Binaries:\n\
         \nApple Silicon (arm64) Binaries:\nA\n\
         \nUniversal Binaries:\n"
    );
    assert!(stderr.is_empty(), "unexpected diagnostics: {stderr}");
}

#[test]
fn test_directory_without_manifest_is_ignored() {
    let apps = AppsDir::new();
    apps.plain_dir("B.app");

    arch_cmd()
        .arg(apps.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\nB\n").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_executable_key_reported() {
    let apps = AppsDir::new();
    let manifest = apps.bundle_with_manifest(
        "C.app",
        "<plist><dict><key>CFBundleName</key><string>C</string></dict></plist>",
    );

    let (stdout, stderr) = stdout_of(&apps);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 1, "stderr: {stderr}");
    assert!(lines[0].contains("ExecutableNameMissing"));
    assert!(lines[0].contains(&manifest.display().to_string()));
    assert!(!stdout.lines().any(|line| line == "C"));
}

#[test]
fn test_intel_section_sorted_by_name() {
    let apps = AppsDir::new();
    apps.bundle("Z.app", "Z", Some(&MACHO_32));
    apps.bundle("M.app", "M", Some(&MACHO_32));

    let (stdout, _) = stdout_of(&apps);
    assert!(stdout.starts_with("\nIntel (x86_64) Binaries:\nM\nZ\n\n"), "{stdout}");
}

#[test]
fn test_unreadable_executable_one_diagnostic() {
    let apps = AppsDir::new();
    apps.bundle("Ghost.app", "Ghost", None);
    apps.bundle("Xcode.app", "Xcode", Some(&FAT));

    let (stdout, stderr) = stdout_of(&apps);
    assert_eq!(
        stderr
            .lines()
            .filter(|line| line.contains("ExecutableUnreadable"))
            .count(),
        1,
        "stderr: {stderr}"
    );
    assert!(stderr.contains("Ghost"));
    assert!(!stdout.contains("Ghost"));
    assert!(stdout.ends_with("\nUniversal Binaries:\nXcode\n"));
}

#[test]
fn test_unrecognized_format_is_a_warning() {
    let apps = AppsDir::new();
    apps.bundle("Script.app", "run", Some(b"#!/bin/sh\n"));

    let (stdout, stderr) = stdout_of(&apps);
    assert!(stderr.contains("WARN"), "stderr: {stderr}");
    assert!(stderr.contains("UnrecognizedFormat"));
    assert!(!stdout.contains("run"));
}

#[test]
fn test_quiet_hides_warnings() {
    let apps = AppsDir::new();
    apps.bundle("Script.app", "run", Some(b"#!/bin/sh\n"));

    arch_cmd()
        .arg(apps.path())
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_root_exits_cleanly() {
    let apps = AppsDir::new();
    let missing = apps.path().join("does-not-exist");

    arch_cmd()
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("RootUnreadable"));
}

#[test]
fn test_json_output() {
    let apps = AppsDir::new();
    apps.bundle("A.app", "A", Some(&MACHO_64));
    apps.bundle("U.app", "U", Some(&FAT));
    apps.bundle("Gone.app", "Gone", None);

    let output = arch_cmd()
        .arg(apps.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["apple_silicon"][0]["executable_name"], "A");
    assert_eq!(report["universal"][0]["executable_name"], "U");
    assert_eq!(report["intel"].as_array().map(Vec::len), Some(0));
    assert_eq!(report["unclassified"], 1);
}

#[test]
fn test_root_from_environment() {
    let apps = AppsDir::new();
    apps.bundle("A.app", "A", Some(&MACHO_64));

    arch_cmd()
        .env("KODEGEN_APPS_DIR", apps.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple Silicon (arm64) Binaries:\nA\n"));
}
