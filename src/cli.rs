//! CLI argument parsing module for storeget

use clap::Parser;
use std::path::PathBuf;

/// Microsoft Store package downloader and installer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "storeget",
    version,
    about = "Download and install Microsoft Store packages via a mirror service"
)]
pub struct CliArgs {
    /// Microsoft Store app URL (prompted for when omitted)
    pub url: Option<String>,

    // General options
    /// Dry run mode - download packages without installing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the package listing and exit without downloading
    #[arg(long)]
    pub list: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Download options
    /// Directory downloads are written to
    #[arg(long, default_value = "downloads")]
    pub out_dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["storeget"]);
        assert!(args.url.is_none());
        assert!(!args.dry_run);
        assert!(!args.list);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert_eq!(args.out_dir, PathBuf::from("downloads"));
        assert_eq!(args.timeout, 30);
        assert!(!args.json);
    }

    #[test]
    fn test_url_argument() {
        let args = CliArgs::parse_from([
            "storeget",
            "https://www.microsoft.com/store/apps/9NKSQGP7F2NH",
        ]);
        assert_eq!(
            args.url.as_deref(),
            Some("https://www.microsoft.com/store/apps/9NKSQGP7F2NH")
        );
    }

    #[test]
    fn test_dry_run_flags() {
        let args = CliArgs::parse_from(["storeget", "-n"]);
        assert!(args.dry_run);

        let args = CliArgs::parse_from(["storeget", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_list_flag() {
        let args = CliArgs::parse_from(["storeget", "--list"]);
        assert!(args.list);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["storeget", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["storeget", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_out_dir() {
        let args = CliArgs::parse_from(["storeget", "--out-dir", "/tmp/pkgs"]);
        assert_eq!(args.out_dir, PathBuf::from("/tmp/pkgs"));
    }

    #[test]
    fn test_timeout() {
        let args = CliArgs::parse_from(["storeget", "--timeout", "5"]);
        assert_eq!(args.timeout, 5);
    }

    #[test]
    fn test_json_output() {
        let args = CliArgs::parse_from(["storeget", "--json"]);
        assert!(args.json);
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "storeget",
            "https://apps.microsoft.com/detail/9wzdncrfj3tj",
            "-n",
            "--verbose",
            "--out-dir",
            "pkgs",
            "--timeout",
            "10",
            "--json",
        ]);
        assert!(args.url.is_some());
        assert!(args.dry_run);
        assert!(args.verbose);
        assert_eq!(args.out_dir, PathBuf::from("pkgs"));
        assert_eq!(args.timeout, 10);
        assert!(args.json);
    }
}
