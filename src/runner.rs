//! uv command runner abstraction
//!
//! Centralized functions for invoking the uv executable with consistent
//! error handling, so the checks never touch `std::process::Command`
//! directly.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::error::CheckError;

/// Invokes a uv executable from a fixed working directory.
///
/// The program defaults to `uv` resolved through PATH; tests point it at a
/// stub executable instead.
#[derive(Debug, Clone)]
pub struct UvRunner {
    program: OsString,
    working_dir: PathBuf,
}

impl UvRunner {
    pub fn new(program: impl Into<OsString>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    /// The program this runner invokes
    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// The directory commands run in
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve the program on the search path.
    ///
    /// Distinguishes "not installed" from every other failure mode: an
    /// unresolvable program maps to `ToolNotFound` rather than a spawn error.
    pub fn resolve(&self) -> Result<PathBuf, CheckError> {
        which::which(&self.program).map_err(CheckError::ToolNotFound)
    }

    /// Run `uv <args>` and return the raw Output.
    ///
    /// Captures stdout and stderr; a launch failure maps to `Spawn`. Use
    /// this when a non-zero exit needs custom handling.
    pub fn run(&self, args: &[&str]) -> Result<Output, CheckError> {
        self.command(args).output().map_err(|source| CheckError::Spawn {
            command: args.join(" "),
            source,
        })
    }

    /// Run `uv <args>`, require success, and return stdout as a trimmed String.
    ///
    /// A non-zero exit maps to `InvocationFailure` carrying the trimmed
    /// stderr.
    pub fn run_checked(&self, args: &[&str]) -> Result<String, CheckError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(invocation_failure(args, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run `uv <args>` inside a virtual environment, require success.
    ///
    /// Activation is done without any shell interpretation: the venv's
    /// scripts directory is prefixed onto the child's PATH and VIRTUAL_ENV
    /// points at the venv root, which is all an activation script does that
    /// matters to uv.
    pub fn run_checked_in_venv(
        &self,
        args: &[&str],
        venv: &Path,
        scripts_dir: &Path,
    ) -> Result<String, CheckError> {
        let mut search_path = vec![scripts_dir.to_path_buf()];
        if let Some(existing) = env::var_os("PATH") {
            search_path.extend(env::split_paths(&existing));
        }
        let search_path = env::join_paths(search_path)?;

        let output = self
            .command(args)
            .env("PATH", search_path)
            .env("VIRTUAL_ENV", venv)
            .output()
            .map_err(|source| CheckError::Spawn {
                command: args.join(" "),
                source,
            })?;

        if !output.status.success() {
            return Err(invocation_failure(args, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

fn invocation_failure(args: &[&str], output: &Output) -> CheckError {
    CheckError::InvocationFailure {
        command: args.join(" "),
        exit_code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_for_missing_program() {
        let runner = UvRunner::new("uv-verify-no-such-program", ".");
        let err = runner.run(&["--version"]).unwrap_err();
        assert!(matches!(err, CheckError::Spawn { .. }));
    }

    #[test]
    fn resolve_fails_for_missing_program() {
        let runner = UvRunner::new("uv-verify-no-such-program", ".");
        let err = runner.resolve().unwrap_err();
        assert!(matches!(err, CheckError::ToolNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn run_checked_returns_trimmed_stdout() {
        // /bin/echo stands in for uv; the runner only cares about argv
        let runner = UvRunner::new("echo", ".");
        let out = runner.run_checked(&["uv", "0.5.11"]).unwrap();
        assert_eq!(out, "uv 0.5.11");
    }

    #[cfg(unix)]
    #[test]
    fn run_checked_maps_nonzero_exit() {
        let runner = UvRunner::new("false", ".");
        let err = runner.run_checked(&["pip", "list"]).unwrap_err();
        match err {
            CheckError::InvocationFailure { command, exit_code, .. } => {
                assert_eq!(command, "pip list");
                assert_eq!(exit_code, Some(1));
            }
            other => panic!("expected InvocationFailure, got {other:?}"),
        }
    }
}
