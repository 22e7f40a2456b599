//! End-to-end tests driving the built `zigcc` binary

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

// Tests run serially: one of them executes a freshly copied binary, which
// fails with ETXTBSY if a concurrent spawn inherited its write handle.

/// Scratch dir holding an empty config file, so the user's own config never leaks in
fn scratch() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();
    (dir, config)
}

fn zigcc(config: &Path, driver: &str) -> Command {
    let mut cmd = Command::cargo_bin("zigcc").unwrap();
    cmd.env("ZIGCC_CONFIG", config)
        .env("ZIGCC_DRIVER", driver)
        .env_remove("ZIGCC_VERBOSE");
    cmd
}

#[test]
#[serial]
fn missing_driver_prints_command_and_fails() {
    let (_dir, config) = scratch();

    zigcc(&config, "zigcc-test-missing-driver")
        .args(["--target", "x86_64-unknown-linux-gnu", "-c", "foo.c"])
        .assert()
        .code(1)
        .stdout("zigcc-test-missing-driver cc --target x86_64-linux-gnu -c foo.c\n")
        .stderr("");
}

#[test]
#[serial]
fn missing_driver_is_explained_when_verbose() {
    let (_dir, config) = scratch();

    zigcc(&config, "zigcc-test-missing-driver")
        .env("ZIGCC_VERBOSE", "1")
        .arg("--target=wasm32-unknown-unknown")
        .assert()
        .code(1)
        .stdout("zigcc-test-missing-driver cc --target=wasm32-freestanding\n")
        .stderr(predicate::str::contains("zigcc-test-missing-driver"))
        .stderr(predicate::str::contains("HINT:"));
}

#[test]
#[serial]
fn trailing_target_flag_is_forwarded() {
    let (_dir, config) = scratch();

    zigcc(&config, "zigcc-test-missing-driver")
        .args(["-c", "foo.c", "--target"])
        .assert()
        .code(1)
        .stdout("zigcc-test-missing-driver cc -c foo.c --target\n");
}

#[test]
#[serial]
fn invalid_config_still_dispatches() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "colour = true\n").unwrap();

    zigcc(&config, "zigcc-test-missing-driver")
        .arg("--target=aarch64-apple-darwin")
        .assert()
        .code(1)
        .stdout("zigcc-test-missing-driver cc --target=aarch64-macos\n")
        .stderr("");
}

#[test]
#[serial]
fn missing_config_file_still_dispatches() {
    let dir = tempfile::tempdir().unwrap();

    zigcc(&dir.path().join("missing.toml"), "zigcc-test-missing-driver")
        .arg("-c")
        .assert()
        .code(1)
        .stdout("zigcc-test-missing-driver cc -c\n")
        .stderr("");
}

#[test]
#[serial]
fn invalid_config_is_explained_when_verbose() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "driver = \n").unwrap();

    zigcc(&config, "zigcc-test-missing-driver")
        .env("ZIGCC_VERBOSE", "1")
        .arg("-c")
        .assert()
        .code(1)
        .stdout("zigcc-test-missing-driver cc -c\n")
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
#[serial]
fn unrecognised_verbose_value_is_silent() {
    let (_dir, config) = scratch();

    zigcc(&config, "zigcc-test-missing-driver")
        .env("ZIGCC_VERBOSE", "maybe")
        .arg("-c")
        .assert()
        .code(1)
        .stdout("zigcc-test-missing-driver cc -c\n")
        .stderr("");
}

#[cfg(unix)]
#[test]
#[serial]
fn invalid_config_still_hands_off() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "colour = true\n").unwrap();

    zigcc(&config, "echo")
        .args(["--target", "x86_64-unknown-linux-gnu", "a.c"])
        .assert()
        .success()
        .stdout(
            "echo cc --target x86_64-linux-gnu a.c\n\
             cc --target x86_64-linux-gnu a.c\n",
        );
}

#[test]
#[serial]
fn driver_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "driver = \"zigcc-test-driver-from-file\"\n").unwrap();

    Command::cargo_bin("zigcc")
        .unwrap()
        .env("ZIGCC_CONFIG", &config)
        .env_remove("ZIGCC_DRIVER")
        .env_remove("ZIGCC_VERBOSE")
        .arg("--version")
        .assert()
        .code(1)
        .stdout("zigcc-test-driver-from-file cc --version\n");
}

#[cfg(unix)]
#[test]
#[serial]
fn handoff_replaces_process() {
    let (_dir, config) = scratch();

    // `echo` stands in for zig and prints the arguments it received
    zigcc(&config, "echo")
        .args(["--target=aarch64-apple-darwin", "-O2", "-c", "foo.c"])
        .assert()
        .success()
        .stdout(
            "echo cc --target=aarch64-macos -O2 -c foo.c\n\
             cc --target=aarch64-macos -O2 -c foo.c\n",
        );
}

#[cfg(unix)]
#[test]
#[serial]
fn cxx_binary_name_selects_cxx_frontend() {
    let (dir, config) = scratch();
    let cxx = dir.path().join("zigc++");
    std::fs::copy(assert_cmd::cargo::cargo_bin("zigcc"), &cxx).unwrap();

    let mut cmd = Command::new(&cxx);
    cmd.env("ZIGCC_CONFIG", &config)
        .env("ZIGCC_DRIVER", "echo")
        .env_remove("ZIGCC_VERBOSE")
        .args(["--target", "x86_64-pc-windows-msvc", "main.cpp"])
        .assert()
        .success()
        .stdout(
            "echo c++ --target x86_64-windows-msvc main.cpp\n\
             c++ --target x86_64-windows-msvc main.cpp\n",
        );
}
