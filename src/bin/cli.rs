//! routescan CLI - list the HTTP endpoints of a Java code base.
//!
//! Usage:
//!   routescan                        # uses ./routescan.toml (or defaults)
//!   routescan --config scan.toml     # explicit config file
//!
//! Scan root and report file come from the config file only.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use routescan::config::DEFAULT_CONFIG_FILE;
use routescan::{scan_directory, ScanConfig};

#[derive(Parser)]
#[command(name = "routescan")]
#[command(about = "routescan - HTTP endpoint inventory for Java controllers", long_about = None)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() {
    // Logs go to stderr; stdout only carries the confirmation line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let base = cli.config.parent().unwrap_or(Path::new("."));
    let config = ScanConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?
        .resolve_paths(base);

    let scan = scan_directory(&config)
        .with_context(|| format!("scanning {}", config.root.display()))?;

    scan.report
        .write_to(&config.output)
        .context("writing report")?;

    println!(
        "API list written to {} ({})",
        config.output.display(),
        scan.summary
    );
    Ok(())
}
