//! Integration tests for the `cmk` generator.
//!
//! These tests drive the built binary in scratch directories and assert on
//! exit status plus what landed on disk. They skip (with a notice) when the
//! binary has not been built yet.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the cmk binary
fn get_cmk_binary() -> PathBuf {
    let target_dir = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target"));

    let bin_name = if cfg!(windows) { "cmk.exe" } else { "cmk" };
    target_dir.join("debug").join(bin_name)
}

fn run_cmk(dir: &std::path::Path, args: &[&str]) -> Option<Output> {
    let cmk = get_cmk_binary();
    if !cmk.exists() {
        eprintln!("Skipping test: cmk binary not found at {:?}", cmk);
        return None;
    }
    Some(
        Command::new(&cmk)
            .args(args)
            .current_dir(dir)
            .output()
            .expect("Failed to execute cmk"),
    )
}

#[test]
fn test_generate_default_project() {
    let dir = tempfile::tempdir().unwrap();
    let Some(output) = run_cmk(dir.path(), &["hello"]) else {
        return;
    };

    assert!(
        output.status.success(),
        "Generation failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let manifest = fs::read_to_string(dir.path().join("CMakeLists.txt"))
        .expect("CMakeLists.txt not written");

    // Sections in fixed order.
    let version = manifest.find("cmake_minimum_required(VERSION 3.10)").unwrap();
    let standard = manifest.find("set(CMAKE_CXX_STANDARD 17)").unwrap();
    let project = manifest.find("project(hello VERSION 1.0)").unwrap();
    let cflags = manifest
        .find("set(CMAKE_CXX_FLAGS \"-Wall -Wextra -Wpedantic -g3\")")
        .unwrap();
    let target = manifest.find("add_executable(hello").unwrap();
    assert!(version < standard && standard < project && project < cflags && cflags < target);

    // Empty src/: the manifest names the starter placeholder, and the
    // starter file itself was created afterwards.
    assert!(manifest.contains("src/main.cpp"));
    let starter = fs::read_to_string(dir.path().join("src").join("main.cpp"))
        .expect("starter file not written");
    assert!(starter.contains("Hello, world!"));
}

#[test]
fn test_second_run_fails_with_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let Some(first) = run_cmk(dir.path(), &["hello"]) else {
        return;
    };
    assert!(first.status.success());

    let manifest_before = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();

    let second = run_cmk(dir.path(), &["hello"]).unwrap();
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(
        stderr.contains("already exists"),
        "unexpected stderr: {stderr}"
    );

    // The first manifest survives untouched.
    let manifest_after = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    assert_eq!(manifest_before, manifest_after);
}

#[test]
fn test_sources_listed_in_reverse_lexicographic_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    for name in ["a.cpp", "z.cpp", "m.h"] {
        fs::write(dir.path().join("src").join(name), "").unwrap();
    }

    let Some(output) = run_cmk(dir.path(), &["ordered"]) else {
        return;
    };
    assert!(output.status.success());

    let manifest = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    let z = manifest.find("src/z.cpp").unwrap();
    let m = manifest.find("src/m.h").unwrap();
    let a = manifest.find("src/a.cpp").unwrap();
    assert!(z < m && m < a, "sources out of order:\n{manifest}");
}

#[test]
fn test_existing_starter_file_is_not_clobbered() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    let starter = dir.path().join("src").join("main.cpp");
    fs::write(&starter, "// custom content\n").unwrap();

    let Some(output) = run_cmk(dir.path(), &["hello"]) else {
        return;
    };
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&starter).unwrap(), "// custom content\n");
}

#[test]
fn test_unknown_template_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let Some(output) = run_cmk(dir.path(), &["hello", "--template", "qt6"]) else {
        return;
    };

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("qt6"), "unexpected stderr: {stderr}");
    assert!(!dir.path().join("CMakeLists.txt").exists());
}

#[test]
fn test_missing_helper_aborts_without_manifest() {
    let cmk = get_cmk_binary();
    if !cmk.exists() {
        eprintln!("Skipping test: cmk binary not found at {:?}", cmk);
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    // An empty PATH guarantees sdl2-config cannot be found.
    let output = Command::new(&cmk)
        .args(["game", "--template", "sdl2"])
        .env("PATH", "")
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute cmk");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("sdl2-config"),
        "unexpected stderr: {stderr}"
    );
    assert!(!dir.path().join("CMakeLists.txt").exists());
}

#[test]
fn test_list_templates_short_circuits_generation() {
    let dir = tempfile::tempdir().unwrap();
    let Some(output) = run_cmk(dir.path(), &["--list-templates"]) else {
        return;
    };

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["console", "sdl2", "wxwidgets", "gtk3"] {
        assert!(stdout.contains(name), "missing '{name}' in:\n{stdout}");
    }
    assert!(!dir.path().join("CMakeLists.txt").exists());
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_no_compile_commands_flag() {
    let dir = tempfile::tempdir().unwrap();
    let Some(output) = run_cmk(dir.path(), &["hello", "--no-compile-commands"]) else {
        return;
    };
    assert!(output.status.success());

    let manifest = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    assert!(!manifest.contains("CMAKE_EXPORT_COMPILE_COMMANDS"));
}

#[test]
fn test_std_and_cmake_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let Some(output) = run_cmk(
        dir.path(),
        &["hello", "--std", "20", "--cmake", "3.16"],
    ) else {
        return;
    };
    assert!(output.status.success());

    let manifest = fs::read_to_string(dir.path().join("CMakeLists.txt")).unwrap();
    assert!(manifest.contains("cmake_minimum_required(VERSION 3.16)"));
    assert!(manifest.contains("set(CMAKE_CXX_STANDARD 20)"));
}
