//! Flat-file store backend
//!
//! Persists all entries as a single JSON object of string-to-string pairs.
//! The whole image is loaded at open and rewritten on every `set` through a
//! temp file, fsync, and atomic rename, so a crash mid-write leaves the
//! previous image intact.
//!
//! The image uses a `BTreeMap`, which serializes with sorted keys; two
//! stores holding the same entries produce byte-identical files.

use crate::StringStore;
use parking_lot::RwLock;
use stash_core::{Error, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed string store.
///
/// The durable backend. Entries are also kept in memory, so `get` never
/// touches the disk; `set` writes through.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store backed by the file at `path`.
    ///
    /// A missing or empty file yields an empty store; the file is created
    /// on the first write. A file that exists but does not hold a JSON
    /// string-to-string object is reported as
    /// [`Error::Serialization`](stash_core::Error::Serialization).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str::<BTreeMap<String, String>>(&contents)
                .map_err(|e| {
                    Error::Serialization(format!(
                        "corrupt store image at {}: {}",
                        path.display(),
                        e
                    ))
                })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(
            path = %path.display(),
            entries = entries.len(),
            "opened file store"
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file from the given entries.
    ///
    /// Called with the write lock held so image and memory cannot diverge.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let image = serde_json::to_string(entries)?;

        let tmp = self.path.with_extension("tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(image.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), bytes = image.len(), "flushed file store");
        Ok(())
    }
}

impl StringStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, raw: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.insert(key.to_owned(), raw.to_owned());
        self.flush(&entries)
    }
}
