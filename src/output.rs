//! Output formatting for listings and run reports
//!
//! This module provides:
//! - Text output for human-readable display with colors
//! - JSON output for machine processing

use crate::domain::{ItemStatus, PackageSet, RunReport};
use colored::Colorize;
use std::io::{self, Write};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

impl OutputFormat {
    /// Select the format from CLI flags
    pub fn from_cli(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write a classified package listing
    fn format_listing(&self, set: &PackageSet, writer: &mut dyn Write) -> io::Result<()>;

    /// Format and write the report of a full run
    fn format_report(&self, report: &RunReport, writer: &mut dyn Write) -> io::Result<()>;
}

/// Create an output formatter based on the selected format
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

/// Human-readable formatter
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }

    fn status_line(status: &ItemStatus) -> String {
        match status {
            ItemStatus::Installed => format!("{}", "installed".green()),
            ItemStatus::Downloaded => format!("{}", "downloaded".green()),
            ItemStatus::SkippedArch => format!("{}", "skipped (architecture)".dimmed()),
            ItemStatus::DownloadFailed { message } => {
                format!("{}: {}", "download failed".red(), message)
            }
            ItemStatus::InstallFailed { output } => {
                format!("{}: {}", "install failed".red(), output.trim())
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_listing(&self, set: &PackageSet, writer: &mut dyn Write) -> io::Result<()> {
        if set.is_empty() {
            writeln!(writer, "No installable packages listed.")?;
            return Ok(());
        }

        writeln!(writer, "{}", "Dependency packages:".bold())?;
        for entry in &set.dependencies {
            writeln!(
                writer,
                "  {}  expires {}  sha1 {}",
                entry.name, entry.expire, entry.sha1
            )?;
        }

        writeln!(writer, "{}", "Application bundles:".bold())?;
        for entry in &set.bundles {
            writeln!(
                writer,
                "  {}  expires {}  sha1 {}",
                entry.name, entry.expire, entry.sha1
            )?;
        }

        Ok(())
    }

    fn format_report(&self, report: &RunReport, writer: &mut dyn Write) -> io::Result<()> {
        for item in &report.items {
            writeln!(
                writer,
                "  {} [{}] {}",
                item.name,
                item.kind,
                Self::status_line(&item.status)
            )?;
        }

        let failed = report.failure_count();
        let summary = format!(
            "{} installed, {} failed ({} files listed)",
            report.installed_count(),
            failed,
            report.listed
        );
        if failed > 0 {
            writeln!(writer, "{}", summary.red())?;
        } else {
            writeln!(writer, "{}", summary.green())?;
        }

        Ok(())
    }
}

/// JSON formatter
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }

    fn write_json<T: serde::Serialize>(value: &T, writer: &mut dyn Write) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, set: &PackageSet, writer: &mut dyn Write) -> io::Result<()> {
        Self::write_json(set, writer)
    }

    fn format_report(&self, report: &RunReport, writer: &mut dyn Write) -> io::Result<()> {
        Self::write_json(report, writer)
    }
}
