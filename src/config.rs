//! Configuration System
//!
//! A check run is driven by a single immutable [`CheckConfig`] assembled at
//! startup from CLI flags and an optional TOML config file, then passed
//! explicitly to each phase. Nothing is global.

use crate::error::CheckError;
use crate::logging::LoggingConfig;
use crate::report::{OutputFormat, ReportFilter};
use crate::walker::WalkerConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Immutable configuration for one check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Manifest of recorded hashes.
    pub hash_file: PathBuf,
    /// Directory tree to scan.
    pub check_dir: PathBuf,
    /// Which status categories to report.
    pub filter: ReportFilter,
    /// Walker tuning from the config file.
    pub scan: WalkerConfig,
    /// Report output format.
    pub format: OutputFormat,
    /// Print a per-status summary table after the report (text mode).
    pub summary: bool,
}

/// File-backed settings: the `[scan]` and `[logging]` sections of the
/// optional TOML config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Walker tuning
    #[serde(default)]
    pub scan: WalkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loader for the optional config file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from an explicit config file path.
    pub fn load_from_file(path: &Path) -> Result<FileConfig, CheckError> {
        let path_str = path.to_str().ok_or_else(|| {
            CheckError::Config(format!(
                "Config path is not valid UTF-8: {}",
                path.display()
            ))
        })?;
        let settings = builder_with_defaults()?
            .add_source(File::with_name(path_str).required(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

/// Create a Config builder with defaults applied; file values override.
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, CheckError> {
    Ok(Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("scan.follow_symlinks", false)?)
}
