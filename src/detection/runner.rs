//! Command existence checking.
//!
//! A toolchain counts as installed when its executable answers a version
//! probe. [`CommandRunner`] is the seam: [`SystemRunner`] spawns real
//! processes, [`super::MockRunner`] replays scripted answers in tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Version flags tried in order; the first one that succeeds wins.
pub const VERSION_FLAGS: [&str; 2] = ["--version", "version"];

/// Why a probe did not produce a usable answer.
///
/// These never escape detection. They are logged and shown to the user as
/// a negative status glyph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The executable is missing, could not be spawned, or exited non-zero.
    #[error("'{command}' unavailable: {reason}")]
    Unavailable { command: String, reason: String },

    /// The executable ran but its version output could not be parsed.
    #[error("could not read a version from '{command}' output: {output:?}")]
    VersionUnparseable { command: String, output: String },
}

/// Runs probe commands.
pub trait CommandRunner {
    /// Run `command` with `args` and return its stdout on a zero exit.
    fn run(&self, command: &str, args: &[&str]) -> Result<String, ProbeError>;

    /// Whether `command` answers any of the [`VERSION_FLAGS`].
    ///
    /// Flags are tried in order and the first success short-circuits.
    fn command_exists(&self, command: &str) -> bool {
        for flag in VERSION_FLAGS {
            match self.run(command, &[flag]) {
                Ok(_) => {
                    tracing::debug!("{} {} succeeded", command, flag);
                    return true;
                }
                Err(e) => tracing::debug!("{} {} failed: {}", command, flag, e),
            }
        }
        false
    }
}

/// Runs probes as real child processes.
///
/// Probe output is captured and never reaches the terminal. No timeout is
/// enforced: a probe that hangs blocks startup.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    search_path: Option<Vec<PathBuf>>,
}

impl SystemRunner {
    /// Resolve executables through the process PATH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve executables only in `dirs`, first match wins.
    pub fn with_search_path(dirs: Vec<PathBuf>) -> Self {
        Self {
            search_path: Some(dirs),
        }
    }

    fn program(&self, command: &str) -> Result<PathBuf, ProbeError> {
        match &self.search_path {
            None => Ok(PathBuf::from(command)),
            Some(dirs) => resolve_tool_path(command, dirs).ok_or_else(|| ProbeError::Unavailable {
                command: command.to_string(),
                reason: "not found on search path".to_string(),
            }),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<String, ProbeError> {
        let program = self.program(command)?;

        let output = Command::new(&program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ProbeError::Unavailable {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ProbeError::Unavailable {
                command: command.to_string(),
                reason: format!("exited with {}", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Return the first executable named `tool` in `dirs`.
fn resolve_tool_path(tool: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}
