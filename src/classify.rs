//! Classification of scanned files against the manifest.

use crate::manifest::Manifest;
use serde::Serialize;
use std::fmt;

/// Classification outcome for a filename relative to the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Mismatch,
    New,
    Removed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::Mismatch => "MISMATCH",
            Status::New => "NEW",
            Status::Removed => "REMOVED",
        };
        f.write_str(s)
    }
}

/// Classify a scanned file against the manifest.
///
/// Exactly one of OK, MISMATCH, NEW applies to every scanned file:
/// recorded-and-equal, recorded-and-different, or not recorded. REMOVED is
/// never returned here; it is decided by the post-walk reconcile pass.
pub fn classify(manifest: &Manifest, filename: &str, actual_hash: &str) -> Status {
    match manifest.lookup(filename) {
        Some(expected) if expected == actual_hash => Status::Ok,
        Some(_) => Status::Mismatch,
        None => Status::New,
    }
}
