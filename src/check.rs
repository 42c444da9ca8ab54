//! Check pipeline: Validate -> Load -> Scan -> Reconcile.
//!
//! The orchestrator wires the manifest, walker, hasher, and classifier
//! together over an immutable [`CheckConfig`]. Text-mode report lines are
//! written to the given writer as files are scanned; JSON mode buffers
//! results into the returned [`CheckReport`].

use crate::classify::{classify, Status};
use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::hasher;
use crate::manifest::Manifest;
use crate::report::{CheckReport, CheckSummary, OutputFormat, ReportEntry};
use crate::walker::Walker;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Run one full check.
///
/// Phases: the all-excluded short-circuit, input validation, manifest load,
/// the scan loop (one path in flight at a time), and the reconcile pass
/// over manifest entries missing from disk. The first error anywhere aborts
/// the run; lines already written stay written.
pub fn run_check<W: Write>(config: &CheckConfig, out: &mut W) -> Result<CheckReport, CheckError> {
    // Configured no-op: every category suppressed, nothing to scan.
    if config.filter.suppresses_everything() {
        info!("all status categories excluded; skipping scan");
        return Ok(CheckReport {
            results: Vec::new(),
            summary: CheckSummary::default(),
        });
    }

    validate(config)?;

    let manifest = Manifest::load(&config.hash_file)?;
    info!(
        entries = manifest.len(),
        manifest = %config.hash_file.display(),
        "manifest loaded"
    );

    let mut results = Vec::new();
    let mut summary = CheckSummary::default();

    // Scan: the walker feeds paths through a rendezvous channel; this loop
    // hashes and classifies each one before the next is produced.
    let walker = Walker::with_config(config.check_dir.clone(), config.scan.clone());
    let (paths, producer) = walker.spawn();
    for path in paths {
        let path = path?;
        let hash = hasher::hash_file(&path)?;
        let filename = path.to_string_lossy();
        let status = classify(&manifest, filename.as_ref(), &hash);
        debug!(path = %path.display(), %status, "classified");
        if config.filter.includes(status) {
            emit(
                config.format,
                out,
                &mut results,
                &mut summary,
                ReportEntry { hash, path, status },
            )?;
        }
    }
    // Channel closed: the traversal is complete.
    let _ = producer.join();

    // Reconcile: manifest filenames that no longer exist on disk. A direct
    // existence check per entry, not a walk.
    if config.filter.includes(Status::Removed) {
        for (filename, hash) in manifest.iter() {
            if !Path::new(filename).exists() {
                emit(
                    config.format,
                    out,
                    &mut results,
                    &mut summary,
                    ReportEntry {
                        hash: hash.to_string(),
                        path: PathBuf::from(filename),
                        status: Status::Removed,
                    },
                )?;
            }
        }
    }

    info!(
        ok = summary.ok,
        mismatch = summary.mismatch,
        new = summary.new,
        removed = summary.removed,
        "check complete"
    );

    Ok(CheckReport { results, summary })
}

/// Verify the run inputs before any work begins: the manifest must open and
/// the check directory must be a readable, traversable directory.
fn validate(config: &CheckConfig) -> Result<(), CheckError> {
    File::open(&config.hash_file).map_err(|source| CheckError::ManifestOpen {
        path: config.hash_file.clone(),
        source,
    })?;

    let metadata =
        std::fs::metadata(&config.check_dir).map_err(|source| CheckError::DirNotTraversable {
            path: config.check_dir.clone(),
            source,
        })?;
    if !metadata.is_dir() {
        return Err(CheckError::NotADirectory(config.check_dir.clone()));
    }
    std::fs::read_dir(&config.check_dir).map_err(|source| CheckError::DirNotTraversable {
        path: config.check_dir.clone(),
        source,
    })?;

    Ok(())
}

/// Count a reported status and either write its line (text) or buffer the
/// entry for the final document (json).
fn emit<W: Write>(
    format: OutputFormat,
    out: &mut W,
    results: &mut Vec<ReportEntry>,
    summary: &mut CheckSummary,
    entry: ReportEntry,
) -> Result<(), CheckError> {
    summary.record(entry.status);
    match format {
        OutputFormat::Text => writeln!(out, "{}", entry.render())?,
        OutputFormat::Json => results.push(entry),
    }
    Ok(())
}
