//! File content digests using SHA-256.
//!
//! The digest algorithm is fixed: manifests use the `sha256sum` line
//! format, so digests must stay interoperable with it.

use crate::error::CheckError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for streaming file content through the digest.
const BUFFER_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file's full byte stream.
///
/// The file is read sequentially start to end; the result is the lowercase
/// hex encoding of the digest. Any open or read failure is returned with
/// the offending path attached and is treated as fatal by callers — no
/// retry, no partial result.
pub fn hash_file(path: &Path) -> Result<String, CheckError> {
    let mut file = File::open(path).map_err(|source| CheckError::Hash {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let bytes_read = file.read(&mut buffer).map_err(|source| CheckError::Hash {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
