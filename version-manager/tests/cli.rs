// SPDX-FileCopyrightText: 2025 Phoenix R&D GmbH <hello@phnx.im>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn repo(version: &str) -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("src-tauri")).unwrap();
    fs::write(
        root.join("package.json"),
        format!("{{\n  \"name\": \"echonote\",\n  \"version\": \"{version}\"\n}}\n"),
    )
    .unwrap();
    fs::write(
        root.join("src-tauri/Cargo.toml"),
        format!(
            "[package]\nname = \"echonote\"\nversion = \"{version}\"\n\n[dependencies]\ntauri = {{ version = \"2\" }}\n"
        ),
    )
    .unwrap();
    fs::write(
        root.join("src-tauri/tauri.conf.json"),
        format!("{{\n  \"version\": \"{version}\",\n  \"identifier\": \"app.echonote\"\n}}\n"),
    )
    .unwrap();
    dir
}

fn manager(root: &Path) -> Command {
    let mut command = Command::cargo_bin("version-manager").unwrap();
    command.arg("--repo-root").arg(root);
    command
}

fn snapshot(root: &Path) -> Vec<Vec<u8>> {
    [
        "package.json",
        "src-tauri/Cargo.toml",
        "src-tauri/tauri.conf.json",
    ]
    .into_iter()
    .map(|file| fs::read(root.join(file)).unwrap())
    .collect()
}

#[test]
fn status_only_reports_consistency() {
    let dir = repo("0.4.0");
    manager(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- package.json         0.4.0 (OK)"))
        .stdout(predicate::str::contains(
            "All version numbers are consistent and valid.",
        ));
}

#[test]
fn status_only_ignores_inconsistency() {
    let dir = repo("0.4.0");
    fs::write(dir.path().join("package.json"), "{\"version\": \"0.4\"}").unwrap();
    manager(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("- package.json         0.4 (invalid)"));
}

#[test]
fn check_fails_on_mismatch() {
    let dir = repo("1.0.0");
    fs::write(dir.path().join("package.json"), "{\"version\": \"1.0.1\"}").unwrap();
    manager(dir.path()).arg("--check").assert().code(1);
}

#[test]
fn set_then_check() {
    let dir = repo("0.4.0");
    manager(dir.path())
        .args(["--set", "2.3.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated version to 2.3.4."));

    let cargo = fs::read_to_string(dir.path().join("src-tauri/Cargo.toml")).unwrap();
    assert!(cargo.contains("version = \"2.3.4\"\n"));
    assert!(cargo.contains("tauri = { version = \"2\" }"));

    manager(dir.path()).arg("--check").assert().success();
}

#[test]
fn invalid_set_fails_fast() {
    let dir = repo("0.4.0");
    let before = snapshot(dir.path());
    manager(dir.path())
        .args(["--set", "not-a-version", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid version 'not-a-version'"));
    assert_eq!(snapshot(dir.path()), before);
}

#[test]
fn bump_patch() {
    let dir = repo("0.4.0");
    manager(dir.path())
        .args(["--bump", "patch", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated version to 0.4.1."));
}
