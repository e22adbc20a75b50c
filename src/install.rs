//! Package installation via the OS installer
//!
//! This module provides:
//! - The Installer trait the orchestrator drives
//! - The Add-AppxPackage implementation used on real systems

use crate::domain::PackageEntry;
use std::path::Path;
use std::process::Command;

/// Result of one install attempt
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    /// Package display name
    pub name: String,
    /// The command that was executed
    pub command: String,
    /// Whether the command exited zero
    pub success: bool,
    /// Combined stdout and stderr text
    pub output: String,
}

impl InstallOutcome {
    /// Create a successful install outcome
    pub fn success(name: impl Into<String>, command: String, output: String) -> Self {
        Self {
            name: name.into(),
            command,
            success: true,
            output,
        }
    }

    /// Create a failed install outcome
    pub fn failure(name: impl Into<String>, command: String, output: String) -> Self {
        Self {
            name: name.into(),
            command,
            success: false,
            output,
        }
    }
}

/// Trait for running the OS package-install command
///
/// Kept synchronous and infallible at the signature level: every attempt
/// produces an outcome, and a failed outcome never stops the caller's
/// iteration over sibling packages.
pub trait Installer: Send + Sync {
    /// Install an already-downloaded package file
    fn install(&self, entry: &PackageEntry, path: &Path) -> InstallOutcome;
}

/// Installer that shells out to `powershell Add-AppxPackage`
///
/// The file path is interpolated into the command string, quoted. A name
/// containing shell metacharacters reaches powershell verbatim; see
/// DESIGN.md before changing this.
#[derive(Debug, Default)]
pub struct AddAppxInstaller;

impl AddAppxInstaller {
    /// Create a new Add-AppxPackage installer
    pub fn new() -> Self {
        Self
    }

    /// Build the powershell command line for a package path
    fn command_for(path: &Path) -> String {
        format!("Add-AppxPackage -Path \"{}\"", path.display())
    }
}

impl Installer for AddAppxInstaller {
    fn install(&self, entry: &PackageEntry, path: &Path) -> InstallOutcome {
        let command = Self::command_for(path);

        let output = match Command::new("powershell")
            .args(["-Command", &command])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                return InstallOutcome::failure(&entry.name, command, e.to_string());
            }
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            InstallOutcome::success(&entry.name, command, combined)
        } else {
            InstallOutcome::failure(&entry.name, command, combined)
        }
    }
}
