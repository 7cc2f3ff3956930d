//! Project metadata and the template enumeration.
//!
//! The template set is closed: each variant pins down which external
//! `*-config` helper (if any) supplies compiler and linker flags, and which
//! starter source body gets written. Adding a library integration means
//! adding a variant here, nothing is discovered dynamically.

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// Supported project templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Plain console executable, no third-party dependency.
    Console,
    /// SDL2 application, flags from `sdl2-config`.
    Sdl2,
    /// wxWidgets application, flags from `wx-config`.
    Wxwidgets,
    /// GTK 3 application, flags from `pkg-config gtk+-3.0`.
    Gtk3,
}

/// The two fixed helper invocations for a library template: one reporting
/// compiler/include flags, one reporting linker flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelperCommands {
    pub cflags: &'static str,
    pub libs: &'static str,
}

impl Template {
    /// Every supported template, in the order shown by `--list-templates`.
    pub fn all() -> &'static [Template] {
        &[
            Template::Console,
            Template::Sdl2,
            Template::Wxwidgets,
            Template::Gtk3,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Console => "console",
            Template::Sdl2 => "sdl2",
            Template::Wxwidgets => "wxwidgets",
            Template::Gtk3 => "gtk3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Console => "Plain console application (default)",
            Template::Sdl2 => "SDL2 window application",
            Template::Wxwidgets => "wxWidgets desktop application",
            Template::Gtk3 => "GTK 3 desktop application",
        }
    }

    /// Helper invocations for this template, or `None` for the
    /// dependency-free console template.
    pub fn helper(&self) -> Option<HelperCommands> {
        match self {
            Template::Console => None,
            Template::Sdl2 => Some(HelperCommands {
                cflags: "sdl2-config --cflags",
                libs: "sdl2-config --libs",
            }),
            Template::Wxwidgets => Some(HelperCommands {
                cflags: "wx-config --cxxflags",
                libs: "wx-config --libs",
            }),
            Template::Gtk3 => Some(HelperCommands {
                cflags: "pkg-config --cflags gtk+-3.0",
                libs: "pkg-config --libs gtk+-3.0",
            }),
        }
    }
}

impl FromStr for Template {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::all()
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ScaffoldError::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything the generation run needs to know about the project being
/// scaffolded. Built once from CLI input, immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    pub name: String,
    pub template: Template,
    pub cxx_standard: String,
    pub cmake_min_version: String,
    pub export_compile_commands: bool,
}

impl ProjectSpec {
    pub fn new(
        name: &str,
        template: Template,
        cxx_standard: &str,
        cmake_min_version: &str,
        export_compile_commands: bool,
    ) -> Result<Self, ScaffoldError> {
        if name.trim().is_empty() {
            return Err(ScaffoldError::EmptyProjectName);
        }
        Ok(ProjectSpec {
            name: name.to_string(),
            template,
            cxx_standard: cxx_standard.to_string(),
            cmake_min_version: cmake_min_version.to_string(),
            export_compile_commands,
        })
    }
}
