use clap::Parser;
use std::path::PathBuf;

use cves_diff::application::dto::OutputFormat;

/// Compare the vulnerabilities reported by two dependency scans
#[derive(Parser, Debug)]
#[command(name = "cves-diff")]
#[command(version)]
#[command(
    about = "Compare two vulnerability scan reports (OWASP Dependency-Check, JFrog Xray) side by side",
    long_about = None
)]
pub struct Args {
    /// First scan report (left column)
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Second scan report (right column)
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Report file to write; "-" writes to stdout
    /// [default: cves-diff-out.md, or cves-diff-out.json with --format json]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to ./cves-diff.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when the two scans differ
    #[arg(long)]
    pub fail_on_diff: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
