//! CLI definitions for hashcheck. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Hashcheck CLI - compare a directory tree against a recorded hash manifest
#[derive(Parser)]
#[command(name = "hashcheck")]
#[command(about = "Compare a directory tree against a recorded hash manifest")]
pub struct Cli {
    /// (required) List of hashes to check against
    #[arg(long, short = 'f')]
    pub hash_file: Option<PathBuf>,

    /// (required) Directory which is scanned and compared against hashes in the hash file
    #[arg(long, short = 'c')]
    pub check_dir: Option<PathBuf>,

    /// Exclude status OK lines
    #[arg(long, short = 'o')]
    pub exclude_ok: bool,

    /// Exclude status MISMATCH lines
    #[arg(long, short = 'm')]
    pub exclude_mismatch: bool,

    /// Exclude status REMOVED lines
    #[arg(long, short = 'r')]
    pub exclude_removed: bool,

    /// Exclude status NEW lines
    #[arg(long, short = 'n')]
    pub exclude_new: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Print a per-status summary table after the report
    #[arg(long)]
    pub summary: bool,

    /// Configuration file path (TOML; [scan] and [logging] sections)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}
