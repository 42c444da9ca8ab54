//! Filesystem walker producing regular-file paths.

use crate::error::CheckError;
use crossbeam_channel::{bounded, Receiver};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration. Doubles as the `[scan]` section of the
/// config file; the defaults scan every regular file under the root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Path components to skip, e.g. ".git" (default: none)
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Start the walk on a background producer thread.
    ///
    /// Regular-file paths are handed over one at a time through a
    /// rendezvous channel: the producer blocks until the consumer takes the
    /// current path, so exactly one path is in flight. Dropping the sender
    /// closes the channel, which is the consumer's sole termination signal.
    /// The first traversal error is forwarded through the channel and ends
    /// the walk; there is no per-entry recovery.
    ///
    /// Traversal order is filesystem-dependent and not sorted.
    pub fn spawn(self) -> (Receiver<Result<PathBuf, CheckError>>, JoinHandle<()>) {
        let (sender, receiver) = bounded(0);

        let handle = thread::spawn(move || {
            let walker = WalkDir::new(&self.root)
                .follow_links(self.config.follow_symlinks)
                .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        let _ = sender.send(Err(CheckError::Walk(e)));
                        return;
                    }
                };

                if self.should_ignore(&entry) {
                    continue;
                }

                // Only regular files are reported; directories are descended
                // into, symlinks follow walkdir's follow_links setting.
                if !entry.file_type().is_file() {
                    continue;
                }

                if sender.send(Ok(entry.into_path())).is_err() {
                    // Consumer hung up; stop walking.
                    return;
                }
            }
        });

        (receiver, handle)
    }

    /// Check if an entry should be ignored based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if self.config.ignore_patterns.is_empty() {
            return false;
        }
        let path = entry.path();
        for pattern in &self.config.ignore_patterns {
            for component in path.components() {
                if let std::path::Component::Normal(name) = component {
                    if name.to_string_lossy() == pattern.as_str() {
                        return true;
                    }
                }
            }
        }
        false
    }
}
