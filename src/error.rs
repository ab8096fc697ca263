//! Error taxonomy for verification checks
//!
//! No variant ever crosses a check boundary: each check catches its error,
//! logs it through the reporter, and reports `false`.

use thiserror::Error;

/// Failure modes of a single verification check
#[derive(Debug, Error)]
pub enum CheckError {
    /// The uv executable could not be located on the search path
    #[error("uv is not installed or not on PATH")]
    ToolNotFound(#[source] which::Error),

    /// The child process could not be launched at all
    #[error("failed to launch `uv {command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// uv ran but exited non-zero
    #[error("`uv {command}` exited with {}: {stderr}", exit_code_label(.exit_code))]
    InvocationFailure {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Expected post-creation filesystem artifacts are absent
    #[error("virtual environment at {path} is missing: {missing}")]
    MissingArtifacts { path: String, missing: String },

    /// PATH could not be reassembled with the venv scripts directory
    #[error("failed to assemble search path for venv invocation")]
    SearchPath(#[from] std::env::JoinPathsError),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
