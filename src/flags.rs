//! Compiler/linker flag resolution via external `*-config` helpers.
//!
//! Library templates name two fixed helper invocations (see
//! [`Template::helper`]): one reporting compiler/include flags, one reporting
//! linker flags. Both run synchronously with captured output; a helper that
//! cannot be launched or exits non-zero aborts the run.
//!
//! Helper output is a well-known but unvalidated format. Tokens are
//! classified by prefix and anything unrecognized passes through unchanged
//! rather than being truncated.

use std::process::Command;

use colored::*;

use crate::error::ScaffoldError;
use crate::project::Template;

/// Flags accumulated from the helpers for one generation run. Insertion
/// order is helper output order, duplicates are kept as emitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlagSet {
    /// Extra compiler flags, appended after the built-in defaults.
    pub cflags: Vec<String>,
    /// Include directories, with the `-I` marker already stripped.
    pub include_dirs: Vec<String>,
    /// Link entries: library names with `-l` stripped, anything else verbatim.
    pub libs: Vec<String>,
}

/// Capability seam over child-process execution, so flag resolution is
/// testable with canned output instead of real helpers.
pub trait CommandRunner {
    /// Run a shell-style command string, split on whitespace into program and
    /// arguments. No quoting or escaping is supported; helper commands with
    /// embedded whitespace in an argument are not representable.
    fn run(&self, command: &str) -> Result<CommandOutput, ScaffoldError>;
}

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Production runner over `std::process::Command`. Blocks until the child
/// exits; there is no timeout, a hung helper hangs the run.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, ScaffoldError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| ScaffoldError::HelperUnavailable {
            command: command.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty helper command"),
        })?;

        let output = Command::new(program).args(parts).output().map_err(|source| {
            ScaffoldError::HelperUnavailable {
                command: command.to_string(),
                source,
            }
        })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Resolve the flag set for `template`. The console template returns an
/// empty set without touching the runner.
pub fn resolve_flags(
    template: Template,
    runner: &dyn CommandRunner,
) -> Result<FlagSet, ScaffoldError> {
    let mut flags = FlagSet::default();

    let Some(helper) = template.helper() else {
        return Ok(flags);
    };

    println!("   {} Querying '{}'...", "🔍".cyan(), helper.cflags);
    let cflags_out = run_helper(runner, helper.cflags)?;
    for token in cflags_out.split_whitespace() {
        match token.strip_prefix("-I") {
            Some(dir) if !dir.is_empty() => flags.include_dirs.push(dir.to_string()),
            _ => flags.cflags.push(token.to_string()),
        }
    }

    println!("   {} Querying '{}'...", "🔍".cyan(), helper.libs);
    let libs_out = run_helper(runner, helper.libs)?;
    for token in libs_out.split_whitespace() {
        match token.strip_prefix("-l") {
            Some(lib) if !lib.is_empty() => flags.libs.push(lib.to_string()),
            // Not a -l token (e.g. -pthread, an .a path): keep it as-is.
            _ => flags.libs.push(token.to_string()),
        }
    }

    Ok(flags)
}

fn run_helper(runner: &dyn CommandRunner, command: &str) -> Result<String, ScaffoldError> {
    let output = runner.run(command)?;
    if !output.success {
        return Err(ScaffoldError::HelperFailed {
            command: command.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }
    Ok(output.stdout)
}
