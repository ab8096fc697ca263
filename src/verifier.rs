//! The verification runner
//!
//! Runs five independent checks against a uv executable in a fixed order
//! and aggregates their outcomes. Every check is total: failures of any
//! kind are logged and reported as `false`, never propagated.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CheckError;
use crate::platform::VenvLayout;
use crate::report::Reporter;
use crate::results::{CheckId, ResultSet};
use crate::runner::UvRunner;

/// Relative path of the throwaway environment used by the venv checks
const TEST_VENV_DIR: &str = "test_venv";

/// Package installed by the package-installation check
const TEST_PACKAGE: &str = "requests";

/// Best-effort removal of the throwaway venv when a check scope ends.
///
/// Covers every exit path, including early invocation failures, so a failed
/// `uv venv` can never leak the directory.
struct VenvGuard {
    path: PathBuf,
}

impl Drop for VenvGuard {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

pub struct Verifier {
    runner: UvRunner,
    layout: VenvLayout,
    reporter: Reporter,
    venv_path: PathBuf,
}

impl Verifier {
    /// Verifier for the `uv` on PATH, working in the current directory
    pub fn from_env(reporter: Reporter) -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("failed to determine working directory")?;
        Ok(Self::new(
            UvRunner::new("uv", working_dir),
            VenvLayout::host(),
            reporter,
        ))
    }

    /// Verifier for an explicit runner and layout (tests use stub programs)
    pub fn new(runner: UvRunner, layout: VenvLayout, reporter: Reporter) -> Self {
        let venv_path = runner.working_dir().join(TEST_VENV_DIR);
        Self {
            runner,
            layout,
            reporter,
            venv_path,
        }
    }

    /// Where the throwaway venv is created
    pub fn venv_path(&self) -> &Path {
        &self.venv_path
    }

    /// Verify uv is installed and report its version
    pub fn check_installed(&mut self) -> bool {
        match self.try_installed() {
            Ok(version) => {
                self.reporter.info(&format!("uv is installed: {version}"));
                true
            }
            Err(err) => {
                self.reporter.error(&err.to_string());
                false
            }
        }
    }

    /// Verify uv can create a well-formed virtual environment
    pub fn check_venv_creation(&mut self) -> bool {
        match self.try_venv_creation() {
            Ok(()) => {
                self.reporter.info("Virtual environment creation: SUCCESS");
                true
            }
            Err(err) => {
                self.reporter
                    .error(&format!("Failed to create virtual environment: {err}"));
                false
            }
        }
    }

    /// Verify uv can install a package into a virtual environment
    pub fn check_package_installation(&mut self) -> bool {
        match self.try_package_installation() {
            Ok(()) => {
                self.reporter.info("Package installation test: SUCCESS");
                true
            }
            Err(err) => {
                self.reporter
                    .error(&format!("Package installation test failed: {err}"));
                false
            }
        }
    }

    /// Verify uv cache operations (query the directory, then clear it)
    pub fn check_cache_functionality(&mut self) -> bool {
        match self.try_cache_functionality() {
            Ok(()) => {
                self.reporter.info("Cache functionality: SUCCESS");
                true
            }
            Err(err) => {
                self.reporter
                    .error(&format!("Cache functionality test failed: {err}"));
                false
            }
        }
    }

    /// Verify uv's pip compatibility surface responds
    pub fn check_pip_compatibility(&mut self) -> bool {
        match self.runner.run_checked(&["pip", "list"]) {
            Ok(_) => {
                self.reporter.info("Pip compatibility: SUCCESS");
                true
            }
            Err(err) => {
                self.reporter
                    .error(&format!("Pip compatibility test failed: {err}"));
                false
            }
        }
    }

    /// Run every check in fixed order and aggregate the outcomes.
    ///
    /// Never short-circuits: a failed check does not stop the ones after it.
    pub fn run_all_checks(&mut self) -> ResultSet {
        let mut results = ResultSet::new();
        for id in CheckId::ALL {
            let passed = match id {
                CheckId::UvInstalled => self.check_installed(),
                CheckId::VenvCreation => self.check_venv_creation(),
                CheckId::PackageInstallation => self.check_package_installation(),
                CheckId::CacheFunctionality => self.check_cache_functionality(),
                CheckId::PipCompatibility => self.check_pip_compatibility(),
            };
            results.record(id, passed);
        }

        self.report_summary(&results);
        results
    }

    fn report_summary(&mut self, results: &ResultSet) {
        self.reporter.plain("");
        self.reporter
            .plain("=== uv installation verification summary ===");
        for (id, passed) in results.iter() {
            let status = if passed {
                format!("{} PASS", "✓".green())
            } else {
                format!("{} FAIL", "✗".red())
            };
            self.reporter.plain(&format!("{id}: {status}"));
        }
    }

    fn try_installed(&self) -> Result<String, CheckError> {
        self.runner.resolve()?;
        self.runner.run_checked(&["--version"])
    }

    fn try_venv_creation(&self) -> Result<(), CheckError> {
        let venv = self.venv_path.clone();
        let _guard = VenvGuard { path: venv.clone() };

        self.runner.run_checked(&["venv", TEST_VENV_DIR])?;

        let missing: Vec<String> = self
            .layout
            .expected_artifacts(&venv)
            .into_iter()
            .filter(|path| !path.exists())
            .map(|path| path.display().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CheckError::MissingArtifacts {
                path: venv.display().to_string(),
                missing: missing.join(", "),
            });
        }
        Ok(())
    }

    fn try_package_installation(&self) -> Result<(), CheckError> {
        let venv = self.venv_path.clone();
        // Guard taken before the first invocation: a failed `uv venv` may
        // still leave a partial directory behind
        let _guard = VenvGuard { path: venv.clone() };

        self.runner.run_checked(&["venv", TEST_VENV_DIR])?;
        self.runner.run_checked_in_venv(
            &["pip", "install", TEST_PACKAGE],
            &venv,
            &self.layout.scripts_path(&venv),
        )?;
        Ok(())
    }

    fn try_cache_functionality(&mut self) -> Result<(), CheckError> {
        let cache_dir = self.runner.run_checked(&["cache", "dir"])?;
        self.reporter.info(&format!("Cache directory: {cache_dir}"));

        self.runner.run_checked(&["cache", "clear"])?;
        Ok(())
    }
}
