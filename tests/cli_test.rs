//! Integration tests for the builddeps binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from the caller's config and tool overrides.
fn builddeps(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("builddeps"));
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("BUILDDEPS_CONFIG")
        .env_remove("RUST_LOG");
    for var in ["CC", "CXX", "GN", "NINJA", "PKG_CONFIG"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build dependencies"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("install"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_an_action() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home).assert().failure();
    Ok(())
}

#[test]
fn cli_rejects_unknown_distro() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home)
        .args(["check", "--distro", "arch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("arch"));
    Ok(())
}

#[test]
fn install_dry_run_prints_commands() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home)
        .args(["install", "--distro", "mac", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brew install ninja sfiera/gn/gn"));
    Ok(())
}

#[test]
fn install_dry_run_passes_flags_through() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home)
        .args(["install", "--distro", "mac", "--dry-run", "--", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brew install ninja sfiera/gn/gn --force"));
    Ok(())
}

#[test]
fn install_flag_before_dry_run_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home)
        .args(["install", "--distro", "mac", "-y", "--dry-run"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("brew").not())
        .stderr(predicate::str::contains("-y"));
    Ok(())
}

#[test]
fn check_reports_missing_tools() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let empty = TempDir::new()?;
    builddeps(&home)
        .env("PATH", empty.path())
        .args(["check", "--distro", "mac"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "missing dependencies: ninja sfiera/gn/gn",
        ))
        .stdout(predicate::str::contains("On macOS, you can install them with:"))
        .stdout(predicate::str::contains("$ brew install ninja sfiera/gn/gn"))
        .stdout(predicate::str::contains("Then, try ./configure again"));
    Ok(())
}

#[test]
fn check_quiet_only_sets_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let empty = TempDir::new()?;
    builddeps(&home)
        .env("PATH", empty.path())
        .args(["--quiet", "check", "--distro", "mac", "--codename", "sonoma"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let empty = TempDir::new()?;
    let output = builddeps(&home)
        .env("PATH", empty.path())
        .args(["check", "--distro", "win", "--json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["status"], "missing");
    assert_eq!(value["missing"][0], "ninja");
    Ok(())
}

#[test]
fn check_uses_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let empty = TempDir::new()?;
    let config = home.path().join("deps.yml");
    fs::write(
        &config,
        r#"
platforms:
  mac:
    install: [port, install]
    packages:
      - name: gn
        package: gn-devel
"#,
    )?;

    builddeps(&home)
        .env("PATH", empty.path())
        .env("BUILDDEPS_CONFIG", &config)
        .args(["check", "--distro", "mac"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("$ port install gn-devel"));
    Ok(())
}

#[test]
fn check_reads_user_config() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let empty = TempDir::new()?;
    let dir = home.path().join(".builddeps");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("config.yml"),
        "platforms:\n  win:\n    install: [scoop, install]\n    packages:\n      - { name: ninja, package: ninja }\n",
    )?;

    builddeps(&home)
        .env("PATH", empty.path())
        .args(["check", "--distro", "win"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("$ scoop install ninja"));
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let config = home.path().join("deps.yml");
    fs::write(&config, "platforms:\n  mac:\n    install: []\n    packages: []\n")?;

    builddeps(&home)
        .arg("--config")
        .arg(&config)
        .args(["check", "--distro", "mac"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn table_missing_for_platform_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    let config = home.path().join("deps.yml");
    fs::write(
        &config,
        "platforms:\n  mac:\n    install: [brew, install]\n    packages:\n      - { name: ninja, package: ninja }\n",
    )?;

    builddeps(&home)
        .arg("--config")
        .arg(&config)
        .args(["install", "--distro", "win", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("win"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    builddeps(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("builddeps"));
    Ok(())
}
