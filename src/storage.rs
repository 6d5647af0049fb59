//! Persistent key-value storage
//!
//! A small JSON-per-key store under the application data directory, used for
//! drafts and other optional client-side state. Every operation degrades
//! instead of failing: errors are logged and reported to the caller as
//! `false` / `None`, never propagated. Losing a draft is not worth an error
//! dialog.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Replaces path separators and other dangerous characters so a key can be
/// used as a file name. Keys are caller-chosen identifiers, not user input,
/// but a traversal attempt must still land inside the store directory.
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Key-value store rooted at one directory, one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    /// A directory that cannot be created is reported on first use instead.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "failed to create storage directory");
        }
        Self { dir }
    }

    /// Opens the default store under the application data directory
    pub fn open_default() -> Option<Self> {
        crate::utils::get_data_dir().map(|mut dir| {
            dir.push("storage");
            Self::open(dir)
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }

    /// Stores a JSON-serializable value under `key`.
    ///
    /// Returns `false` if serialization or the write fails; the failure is
    /// logged and the previous value (if any) is left intact.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match self.write_entry(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "failed to write storage entry");
                false
            }
        }
    }

    /// Atomic write: temp file in the same directory, then persist over the
    /// target so readers never observe a half-written value
    fn write_entry<T: Serialize>(&self, key: &str, value: &T) -> crate::Result<()> {
        let json = serde_json::to_vec_pretty(value)?;

        use std::io::Write;
        let mut temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        temp.write_all(&json)?;
        temp.as_file().sync_all()?;
        temp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Retrieves the value stored under `key`.
    ///
    /// Returns `None` for an absent key, and also for unreadable or corrupt
    /// entries (logged).
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.read_entry(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read storage entry");
                None
            }
        }
    }

    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> crate::Result<Option<T>> {
        let json = match std::fs::read(self.path_for(key)) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&json)?))
    }

    /// Removes the value stored under `key`. Removing an absent key succeeds.
    pub fn remove(&self, key: &str) -> bool {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                warn!(key, error = %e, "failed to remove storage entry");
                false
            }
        }
    }

    /// Removes every entry in the store
    pub fn clear(&self) -> bool {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "failed to list storage directory");
                return false;
            }
        };

        let mut ok = true;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Err(e) = std::fs::remove_file(&path)
            {
                warn!(path = %path.display(), error = %e, "failed to remove storage entry");
                ok = false;
            }
        }
        ok
    }
}
