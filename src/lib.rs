//! # cmkgen - One-shot CMake project scaffolder
//!
//! cmkgen bootstraps a native C++ project in the current directory: it writes
//! a `CMakeLists.txt` describing the compiler standard, warning flags, any
//! third-party library flags, and the source files already present under
//! `src/`, plus a starter `src/main.cpp` matching the chosen template.
//!
//! It is deliberately a generator, not a build tool. Once the files are on
//! disk, CMake owns the project; rerunning cmkgen in the same directory is
//! refused rather than merged.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scaffold a plain console project
//! cmk hello
//!
//! # Scaffold an SDL2 project (requires sdl2-config on PATH)
//! cmk game --template sdl2
//! ```
//!
//! ## Module Organization
//!
//! - [`project`] - Project metadata and the closed template set
//! - [`flags`] - Compiler/linker flag resolution via external `*-config` helpers
//! - [`discover`] - Source file discovery under `src/`
//! - [`manifest`] - `CMakeLists.txt` assembly and writing
//! - [`templates`] - Starter source bodies per template

/// Source file discovery under the conventional `src/` directory.
pub mod discover;

/// Error taxonomy shared across the generation run.
pub mod error;

/// External flag-resolver helpers (`sdl2-config`, `wx-config`, `pkg-config`).
pub mod flags;

/// `CMakeLists.txt` assembly.
pub mod manifest;

/// Project metadata and the template enumeration.
pub mod project;

/// Starter source bodies (console, sdl2, wxwidgets, gtk3).
pub mod templates;

/// Terminal UI utilities (tables).
pub mod ui;

pub use error::ScaffoldError;
