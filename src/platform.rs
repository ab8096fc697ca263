//! Platform-specific virtual environment layout
//!
//! All host-OS branching lives here as one pure mapping, so the checks never
//! carry inline platform conditionals.

use std::path::{Path, PathBuf};

/// Names of the filesystem artifacts a freshly created venv must contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenvLayout {
    /// Subdirectory holding executables ("bin" on unix, "Scripts" on windows)
    pub scripts_dir: &'static str,
    /// Activation script inside the scripts directory
    pub activate_script: &'static str,
    /// Configuration marker, relative to the venv root
    pub config_marker: &'static str,
}

impl VenvLayout {
    /// Layout for a given OS identity string (`std::env::consts::OS` values).
    ///
    /// Anything that is not windows gets the unix layout, matching how uv
    /// itself lays out environments.
    pub fn for_os(os: &str) -> Self {
        if os == "windows" {
            VenvLayout {
                scripts_dir: "Scripts",
                activate_script: "activate.bat",
                config_marker: "Scripts/activate",
            }
        } else {
            VenvLayout {
                scripts_dir: "bin",
                activate_script: "activate",
                config_marker: "pyvenv.cfg",
            }
        }
    }

    /// Layout for the host this process is running on
    pub fn host() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Absolute path of the scripts directory inside `venv`
    pub fn scripts_path(&self, venv: &Path) -> PathBuf {
        venv.join(self.scripts_dir)
    }

    /// The artifacts that must exist for `venv` to count as well-formed
    pub fn expected_artifacts(&self, venv: &Path) -> Vec<PathBuf> {
        vec![
            venv.join(self.scripts_dir),
            venv.join("lib"),
            venv.join(self.config_marker),
        ]
    }
}
