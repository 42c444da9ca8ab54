//! Hash manifest parsing.
//!
//! A manifest is the `sha256sum` line format: one record per line,
//! `<hex digest><two ASCII spaces><filename>`. The manifest is the source
//! of truth a check run compares the filesystem against.

use crate::error::CheckError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Column separator between the digest and the filename.
const SEPARATOR: &str = "  ";

/// Parsed manifest: filename -> recorded hex digest.
///
/// Built once at startup and read-only for the rest of the run. Duplicate
/// filenames keep the last line. Lines without the two-space separator are
/// skipped.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: HashMap<String, String>,
}

impl Manifest {
    /// Load a manifest from disk.
    ///
    /// An unopenable file or a read error mid-scan is fatal and carries the
    /// manifest path.
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let file = File::open(path).map_err(|source| CheckError::ManifestOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut entries = HashMap::new();
        for line in reader.lines() {
            let line = line.map_err(|source| CheckError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;
            match parse_line(&line) {
                Some((filename, hash)) => {
                    entries.insert(filename.to_string(), hash.to_string());
                }
                None => debug!(%line, "skipping manifest line without separator"),
            }
        }

        Ok(Self { entries })
    }

    /// Recorded digest for a filename.
    ///
    /// Returns `None` both for filenames the manifest never mentions and
    /// for entries whose recorded digest is empty: an empty digest cannot
    /// match any computed hash, so such entries count as absent for
    /// classification. They still take part in reconciliation via [`iter`].
    ///
    /// [`iter`]: Manifest::iter
    pub fn lookup(&self, filename: &str) -> Option<&str> {
        match self.entries.get(filename) {
            Some(hash) if !hash.is_empty() => Some(hash),
            _ => None,
        }
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every (filename, digest) entry, duplicates collapsed.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split a manifest line on the first two-space separator into
/// (filename, digest). Lines without the separator yield `None`.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (hash, filename) = line.split_once(SEPARATOR)?;
    Some((filename, hash))
}
