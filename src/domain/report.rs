//! Run report structures
//!
//! Every package the orchestrator touches produces one ItemReport; the
//! RunReport aggregates them for output and exit-code selection.

use super::PackageKind;
use serde::Serialize;
use std::fmt;

/// What happened to a single package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    /// Downloaded and installed
    Installed,
    /// Downloaded only (dry-run)
    Downloaded,
    /// Dependency whose name does not carry the detected arch label
    SkippedArch,
    /// Download failed; the item was not installed
    DownloadFailed { message: String },
    /// Install subprocess failed; output is the combined stdout+stderr
    InstallFailed { output: String },
}

impl ItemStatus {
    /// Returns true for the two failure variants
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ItemStatus::DownloadFailed { .. } | ItemStatus::InstallFailed { .. }
        )
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Installed => write!(f, "installed"),
            ItemStatus::Downloaded => write!(f, "downloaded"),
            ItemStatus::SkippedArch => write!(f, "skipped (architecture)"),
            ItemStatus::DownloadFailed { message } => write!(f, "download failed: {}", message),
            ItemStatus::InstallFailed { output } => write!(f, "install failed: {}", output),
        }
    }
}

/// Outcome for one listed package
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    /// Package display name
    pub name: String,
    /// Dependency or bundle
    pub kind: PackageKind,
    /// What happened
    #[serde(flatten)]
    pub status: ItemStatus,
}

impl ItemReport {
    /// Creates a report for one package
    pub fn new(name: impl Into<String>, kind: PackageKind, status: ItemStatus) -> Self {
        Self {
            name: name.into(),
            kind,
            status,
        }
    }
}

/// Aggregated outcome of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Vendor label the dependency filter used (may be empty)
    pub arch_label: String,
    /// Number of rows the listing parser produced
    pub listed: usize,
    /// One entry per dependency/bundle the orchestrator considered
    pub items: Vec<ItemReport>,
}

impl RunReport {
    /// Creates an empty report for the given arch label
    pub fn new(arch_label: impl Into<String>) -> Self {
        Self {
            arch_label: arch_label.into(),
            listed: 0,
            items: Vec::new(),
        }
    }

    /// Records the outcome for one package
    pub fn push(&mut self, name: impl Into<String>, kind: PackageKind, status: ItemStatus) {
        self.items.push(ItemReport::new(name, kind, status));
    }

    /// Number of successfully installed packages
    pub fn installed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.status == ItemStatus::Installed)
            .count()
    }

    /// Number of per-item failures
    pub fn failure_count(&self) -> usize {
        self.items.iter().filter(|i| i.status.is_failure()).count()
    }

    /// Returns true if any item failed to download or install
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}
