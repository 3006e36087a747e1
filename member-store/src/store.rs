//! File-backed member storage
//!
//! One record per file. Saving truncates and replaces whatever the file
//! held before; loading reads the whole file back into an owned record.
//! There is no update-in-place: every save rewrites the full record.

use std::fs;
use std::path::{Path, PathBuf};

use shared::models::Member;

use crate::codec;
use crate::error::Result;

/// Path-bound storage for a single member record.
#[derive(Debug, Clone)]
pub struct MemberFile {
    path: PathBuf,
}

impl MemberFile {
    /// Storage at `{base_path}/{filename}`.
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    /// Storage at a specific path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the parent directory exists.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Saves a record, replacing any previous file content.
    ///
    /// A failed save leaves the file in an indeterminate state; writes
    /// are not atomic, so the caller retries or picks another path.
    pub fn save(&self, member: &Member) -> Result<()> {
        self.ensure_dir()?;
        let bytes = codec::encode(member);
        fs::write(&self.path, &bytes)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "member saved");
        Ok(())
    }

    /// Loads the record stored at this path.
    pub fn load(&self) -> Result<Member> {
        let bytes = fs::read(&self.path)?;
        let member = codec::decode(&bytes)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "member loaded");
        Ok(member)
    }
}
