//! storeget - Microsoft Store package downloader and installer
//!
//! Looks up direct download links for a Microsoft Store app through the
//! rg-adguard mirror, downloads the packages matching the host CPU
//! architecture, and installs them with Add-AppxPackage.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;
use storeget::cli::CliArgs;
use storeget::orchestrator::Orchestrator;
use storeget::output::{create_formatter, OutputFormat};

/// Cosmetic pause before exiting an install run
const EXIT_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("storeget v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Download directory: {}", args.out_dir.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let orchestrator = Orchestrator::from_args(&args)?;

    if !args.quiet && !args.json {
        println!(
            "Detected architecture: {}",
            orchestrator.config().arch_label
        );
    }

    let store_url = match args.url.clone() {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    // Listing-only mode: no downloads, no installs
    if args.list {
        let set = orchestrator.fetch_listing(&store_url).await?;
        let formatter = create_formatter(OutputFormat::from_cli(args.json));
        let mut stdout = io::stdout().lock();
        formatter.format_listing(&set, &mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let report = orchestrator.run(&store_url).await?;

    {
        let formatter = create_formatter(OutputFormat::from_cli(args.json));
        let mut stdout = io::stdout().lock();
        if !args.quiet || report.has_failures() {
            formatter.format_report(&report, &mut stdout)?;
        }
        stdout.flush()?;
    }

    if !args.quiet && !args.json {
        println!("Finish");
    }
    tokio::time::sleep(EXIT_DELAY).await;

    if report.has_failures() {
        // Partial success - some packages failed
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Read the target URL from standard input
fn prompt_for_url() -> anyhow::Result<String> {
    print!("Enter Microsoft Store app URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
