//! Error taxonomy for a generation run.
//!
//! Every variant is fatal: the run aborts, nothing is retried, and files
//! already written stay on disk. The binary maps all of these to exit code 1.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Usage error: the requested template is not in the supported set.
    #[error("unknown template '{0}' (run 'cmk --list-templates' to see what is supported)")]
    UnknownTemplate(String),

    /// Usage error: a project name was given but it is empty.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// Conflict: the manifest already exists and is never overwritten.
    #[error("{} already exists - remove it first to regenerate", .0.display())]
    ManifestExists(PathBuf),

    /// A flag-resolver helper could not be started at all.
    #[error("failed to run '{command}': {source} (is it installed and on PATH?)")]
    HelperUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A flag-resolver helper ran but exited non-zero. Captured output is
    /// echoed so the user can see what the helper complained about.
    #[error("'{command}' exited with an error{}", format_helper_output(.stdout, .stderr))]
    HelperFailed {
        command: String,
        stdout: String,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_helper_output(stdout: &str, stderr: &str) -> String {
    let mut msg = String::new();
    if !stdout.trim().is_empty() {
        msg.push_str("\nstdout: ");
        msg.push_str(stdout.trim());
    }
    if !stderr.trim().is_empty() {
        msg.push_str("\nstderr: ");
        msg.push_str(stderr.trim());
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_failed_echoes_captured_output() {
        let err = ScaffoldError::HelperFailed {
            command: "sdl2-config --cflags".to_string(),
            stdout: "".to_string(),
            stderr: "Package sdl2 was not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sdl2-config --cflags"));
        assert!(msg.contains("Package sdl2 was not found"));
    }

    #[test]
    fn helper_failed_with_silent_helper_stays_single_line() {
        let err = ScaffoldError::HelperFailed {
            command: "wx-config --libs".to_string(),
            stdout: " ".to_string(),
            stderr: "".to_string(),
        };
        assert!(!err.to_string().contains("stdout:"));
    }

    #[test]
    fn manifest_exists_names_the_path() {
        let err = ScaffoldError::ManifestExists(PathBuf::from("CMakeLists.txt"));
        assert!(err.to_string().contains("CMakeLists.txt"));
    }
}
