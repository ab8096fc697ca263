//! Check identifiers and the per-run result set

use std::fmt;
use std::process::ExitCode;

/// Identifier of one verification check.
///
/// The declaration order is the run order and the summary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckId {
    UvInstalled,
    VenvCreation,
    PackageInstallation,
    CacheFunctionality,
    PipCompatibility,
}

impl CheckId {
    /// Every check, in run order
    pub const ALL: [CheckId; 5] = [
        CheckId::UvInstalled,
        CheckId::VenvCreation,
        CheckId::PackageInstallation,
        CheckId::CacheFunctionality,
        CheckId::PipCompatibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::UvInstalled => "uv_installed",
            CheckId::VenvCreation => "venv_creation",
            CheckId::PackageInstallation => "package_installation",
            CheckId::CacheFunctionality => "cache_functionality",
            CheckId::PipCompatibility => "pip_compatibility",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping of check identifier to outcome for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(CheckId, bool)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a check, preserving insertion order
    pub fn record(&mut self, id: CheckId, passed: bool) {
        self.entries.push((id, passed));
    }

    /// Outcome of a specific check, if it was recorded
    pub fn get(&self, id: CheckId) -> Option<bool> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, passed)| *passed)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (CheckId, bool)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff every recorded check passed
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|(_, passed)| *passed)
    }

    /// Process exit status: 0 iff every check passed, 1 otherwise
    pub fn exit_code(&self) -> ExitCode {
        if self.all_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
