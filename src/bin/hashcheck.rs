//! Hashcheck CLI Binary
//!
//! Entry point and single top-level error handler: every failure below the
//! configuration layer aborts the process with a message on stderr.

use clap::{CommandFactory, Parser};
use hashcheck::check::run_check;
use hashcheck::cli::Cli;
use hashcheck::config::{CheckConfig, ConfigLoader, FileConfig};
use hashcheck::error::CheckError;
use hashcheck::logging::{init_logging, LoggingConfig};
use hashcheck::report::{format_report_json, format_summary_text, OutputFormat, ReportFilter};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let file_config = match load_file_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, file_config.logging.clone());
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let filter = ReportFilter::from_excludes(
        cli.exclude_ok,
        cli.exclude_mismatch,
        cli.exclude_removed,
        cli.exclude_new,
    );

    // Every category suppressed: a configured no-op, checked before flag
    // validation so nothing else runs.
    if filter.suppresses_everything() {
        info!("all status categories excluded; nothing to do");
        return;
    }

    // Missing required flags print usage and exit cleanly.
    let (hash_file, check_dir) = match (cli.hash_file.clone(), cli.check_dir.clone()) {
        (Some(hash_file), Some(check_dir)) => (hash_file, check_dir),
        _ => {
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            return;
        }
    };

    let format = match OutputFormat::parse(&cli.format) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let config = CheckConfig {
        hash_file,
        check_dir,
        filter,
        scan: file_config.scan,
        format,
        summary: cli.summary,
    };

    info!(
        hash_file = %config.hash_file.display(),
        check_dir = %config.check_dir.display(),
        "starting check"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_check(&config, &mut out) {
        Ok(report) => match config.format {
            OutputFormat::Json => match format_report_json(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("failed to render report: {}", e);
                    eprintln!("{}", e);
                    process::exit(1);
                }
            },
            OutputFormat::Text => {
                if config.summary {
                    print!("{}", format_summary_text(&report.summary));
                }
            }
        },
        Err(e) => {
            error!("check failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Load the optional TOML config file named on the command line.
fn load_file_config(cli: &Cli) -> Result<FileConfig, CheckError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => Ok(FileConfig::default()),
    }
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    config
}
