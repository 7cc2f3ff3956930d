//! Source file discovery under the conventional `src/` directory.
//!
//! Discovery runs once per generation. Paths are returned relative to the
//! project root with forward slashes and sorted in reverse lexicographic
//! order, so regenerating from unchanged inputs reproduces a byte-identical
//! manifest. An empty source tree is not an error: the conventional starter
//! path is substituted so the manifest stays valid before any code exists.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ScaffoldError;

/// Conventional source directory, relative to the generation root.
pub const SOURCE_DIR: &str = "src";

/// Placeholder named in the manifest when `src/` holds no sources yet. This
/// is the same path the template selector writes the starter body to.
pub const STARTER_SOURCE: &str = "src/main.cpp";

/// Recognized source and header extensions. Case-sensitive: `.H` is a
/// C++ header convention distinct from `.h`.
const SOURCE_EXTENSIONS: [&str; 6] = ["cpp", "c", "cxx", "h", "hpp", "H"];

/// Enumerate compilable sources under `<root>/src`, creating the directory
/// if it does not exist yet.
pub fn discover_sources(root: &Path) -> Result<Vec<String>, ScaffoldError> {
    let src_dir = root.join(SOURCE_DIR);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(&src_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_source = path
            .extension()
            .is_some_and(|ext| SOURCE_EXTENSIONS.iter().any(|s| *s == ext.to_string_lossy()));
        if !is_source {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        sources.push(relative.to_string_lossy().replace('\\', "/"));
    }

    // Reverse lexicographic: stable and deterministic across runs.
    sources.sort_by(|a, b| b.cmp(a));

    if sources.is_empty() {
        sources.push(STARTER_SOURCE.to_string());
    }

    Ok(sources)
}
