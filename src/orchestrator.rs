//! Run orchestrator for the whole download-and-install workflow
//!
//! This module provides:
//! - Workflow coordination: validate -> query -> parse -> classify ->
//!   download -> install
//! - Architecture filtering for dependency packages
//! - Per-item error handling with partial continuation

use crate::arch::{detect_arch_label, matches_arch};
use crate::cli::CliArgs;
use crate::domain::{ItemStatus, PackageEntry, PackageKind, PackageSet, RunReport};
use crate::error::{AppError, MirrorError};
use crate::fetch::{HttpFetcher, PackageFetcher};
use crate::install::{AddAppxInstaller, Installer};
use crate::listing::{ListingParser, TableListingParser};
use crate::mirror::{validate_store_url, HttpClient, MirrorClient, RgAdguardClient};
use crate::progress::Progress;
use std::time::Duration;

/// Configuration for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Vendor label for the host CPU; empty when unrecognized
    pub arch_label: String,
    /// Download packages but skip the install subprocess
    pub dry_run: bool,
    /// Whether to render progress bars
    pub show_progress: bool,
}

/// Orchestrator wiring the mirror, parser, fetcher, and installer
pub struct Orchestrator {
    config: RunConfig,
    mirror: Box<dyn MirrorClient>,
    parser: Box<dyn ListingParser>,
    fetcher: Box<dyn PackageFetcher>,
    installer: Box<dyn Installer>,
}

impl Orchestrator {
    /// Create an orchestrator with explicit collaborators
    pub fn with_collaborators(
        config: RunConfig,
        mirror: Box<dyn MirrorClient>,
        parser: Box<dyn ListingParser>,
        fetcher: Box<dyn PackageFetcher>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            config,
            mirror,
            parser,
            fetcher,
            installer,
        }
    }

    /// Create an orchestrator with the system collaborators from CLI args
    pub fn from_args(args: &CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(Duration::from_secs(args.timeout))
            .map_err(MirrorError::from)?;

        let config = RunConfig {
            arch_label: detect_arch_label().to_string(),
            dry_run: args.dry_run,
            show_progress: !args.quiet && !args.json,
        };

        Ok(Self::with_collaborators(
            config,
            Box::new(RgAdguardClient::new(client.clone())),
            Box::new(TableListingParser::new()),
            Box::new(HttpFetcher::new(client, &args.out_dir)),
            Box::new(AddAppxInstaller::new()),
        ))
    }

    /// Returns the run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Validate, query, parse, and classify without touching the disk.
    /// Backs the `--list` mode.
    pub async fn fetch_listing(&self, store_url: &str) -> Result<PackageSet, AppError> {
        validate_store_url(store_url)?;
        let html = self.mirror.fetch_listing_html(store_url).await?;
        Ok(PackageSet::from_entries(self.parser.parse_listing(&html)))
    }

    /// Run the full workflow for one store URL
    ///
    /// Validation and mirror failures abort the run. Everything after the
    /// listing is per-item: a failed download or install is recorded and
    /// the remaining packages are still attempted.
    pub async fn run(&self, store_url: &str) -> Result<RunReport, AppError> {
        let mut progress = Progress::new(self.config.show_progress);
        let mut report = RunReport::new(&self.config.arch_label);

        validate_store_url(store_url)?;

        progress.spinner("Querying mirror for package links...");
        let html = self.mirror.fetch_listing_html(store_url).await?;
        progress.finish_and_clear();

        // An empty listing is not an error; the loops below just no-op
        let entries = self.parser.parse_listing(&html);
        report.listed = entries.len();
        let set = PackageSet::from_entries(entries);

        progress.start(set.len() as u64, "Processing packages");

        for entry in &set.dependencies {
            progress.set_message(&entry.name);
            let status = if matches_arch(&entry.name, &self.config.arch_label) {
                self.fetch_and_install(entry).await
            } else {
                ItemStatus::SkippedArch
            };
            report.push(&entry.name, PackageKind::Dependency, status);
            progress.inc();
        }

        // Bundles carry no arch gate; they ship multi-arch payloads
        for entry in &set.bundles {
            progress.set_message(&entry.name);
            let status = self.fetch_and_install(entry).await;
            report.push(&entry.name, PackageKind::Bundle, status);
            progress.inc();
        }

        progress.finish_and_clear();
        Ok(report)
    }

    /// Download one package and, unless dry-running, install it
    async fn fetch_and_install(&self, entry: &PackageEntry) -> ItemStatus {
        let path = match self.fetcher.fetch(entry).await {
            Ok(path) => path,
            Err(e) => {
                return ItemStatus::DownloadFailed {
                    message: e.to_string(),
                }
            }
        };

        if self.config.dry_run {
            return ItemStatus::Downloaded;
        }

        let outcome = self.installer.install(entry, &path);
        if outcome.success {
            ItemStatus::Installed
        } else {
            ItemStatus::InstallFailed {
                output: outcome.output,
            }
        }
    }
}
