//! `CMakeLists.txt` assembly.
//!
//! The writer is an append-only builder over an in-memory buffer: each
//! section method appends one statement block and nothing is ever revised
//! in place. [`write_manifest`] enforces the creation precondition (the
//! manifest must not already exist) and emits the sections in a fixed order,
//! so the same inputs always produce the same bytes.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::flags::FlagSet;
use crate::project::ProjectSpec;

/// Conventional manifest path, relative to the generation root.
pub const MANIFEST_FILE: &str = "CMakeLists.txt";

/// Version written into `project(... VERSION x)`.
const PROJECT_VERSION: &str = "1.0";

/// Warning and debug flags every generated project starts with. Helper
/// flags are appended after these.
pub const DEFAULT_CXX_FLAGS: [&str; 4] = ["-Wall", "-Wextra", "-Wpedantic", "-g3"];

/// Append-only builder for the manifest text.
#[derive(Debug, Default)]
pub struct CmakeWriter {
    buf: String,
}

impl CmakeWriter {
    pub fn new() -> Self {
        CmakeWriter::default()
    }

    fn line(&mut self, stmt: &str) {
        self.buf.push_str(stmt);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn minimum_version(&mut self, version: &str) {
        self.line(&format!("cmake_minimum_required(VERSION {version})"));
    }

    pub fn cxx_standard(&mut self, standard: &str) {
        self.line(&format!("set(CMAKE_CXX_STANDARD {standard})"));
        self.line("set(CMAKE_CXX_STANDARD_REQUIRED true)");
    }

    pub fn export_compile_commands(&mut self) {
        self.line("set(CMAKE_EXPORT_COMPILE_COMMANDS true)");
    }

    pub fn project(&mut self, name: &str, version: &str) {
        self.line(&format!("project({name} VERSION {version})"));
    }

    /// All compiler flags, space-joined into a single quoted value.
    pub fn cxx_flags<'a>(&mut self, flags: impl IntoIterator<Item = &'a str>) {
        let joined = flags.into_iter().collect::<Vec<_>>().join(" ");
        self.line(&format!("set(CMAKE_CXX_FLAGS \"{joined}\")"));
    }

    pub fn include_directories(&mut self, dirs: &[String]) {
        self.multiline_statement("include_directories", dirs);
    }

    pub fn link_libraries(&mut self, libs: &[String]) {
        self.multiline_statement("link_libraries", libs);
    }

    pub fn executable(&mut self, name: &str, sources: &[String]) {
        let _ = write!(self.buf, "add_executable({name}");
        for source in sources {
            let _ = write!(self.buf, "\n    {source}");
        }
        self.line("\n)");
    }

    fn multiline_statement(&mut self, command: &str, values: &[String]) {
        let _ = write!(self.buf, "{command}(");
        for value in values {
            let _ = write!(self.buf, "\n    {value}");
        }
        self.line("\n)");
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Render the manifest for `spec` into a string, sections in fixed order.
pub fn render_manifest(spec: &ProjectSpec, flags: &FlagSet, sources: &[String]) -> String {
    let mut writer = CmakeWriter::new();

    writer.minimum_version(&spec.cmake_min_version);
    writer.blank();

    writer.cxx_standard(&spec.cxx_standard);
    writer.blank();

    if spec.export_compile_commands {
        writer.export_compile_commands();
        writer.blank();
    }

    writer.project(&spec.name, PROJECT_VERSION);
    writer.blank();

    writer.cxx_flags(
        DEFAULT_CXX_FLAGS
            .iter()
            .copied()
            .chain(flags.cflags.iter().map(String::as_str)),
    );
    writer.blank();

    if !flags.include_dirs.is_empty() {
        writer.include_directories(&flags.include_dirs);
        writer.blank();
    }

    if !flags.libs.is_empty() {
        writer.link_libraries(&flags.libs);
        writer.blank();
    }

    writer.executable(&spec.name, sources);

    writer.finish()
}

/// Write the manifest into `root`, refusing to touch an existing one.
pub fn write_manifest(
    root: &Path,
    spec: &ProjectSpec,
    flags: &FlagSet,
    sources: &[String],
) -> Result<PathBuf, ScaffoldError> {
    let path = root.join(MANIFEST_FILE);
    if path.exists() {
        return Err(ScaffoldError::ManifestExists(path));
    }
    fs::write(&path, render_manifest(spec, flags, sources))?;
    Ok(path)
}
