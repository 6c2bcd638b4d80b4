//! Disk I/O cycle with guaranteed scratch-file cleanup.
//!
//! # Responsibilities
//! - Write a fixed-size buffer to a per-request scratch file
//! - Read the full file back
//! - Remove the file on every exit path, including errors

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

/// Error type for the disk I/O cycle.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("failed to write scratch file: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to read scratch file back: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to remove scratch file: {0}")]
    Remove(#[source] std::io::Error),
    #[error("scratch read returned {got} bytes, expected {expected}")]
    ShortRead { got: usize, expected: usize },
}

/// RAII handle for a scratch file.
///
/// Each handle gets a unique path, so concurrent cycles never collide.
/// `remove` is the normal exit; if the handle is dropped still armed (an
/// earlier step failed), `Drop` removes the file best-effort so no scratch
/// file outlives its request.
pub struct ScratchFile {
    path: PathBuf,
    armed: bool,
}

impl ScratchFile {
    /// Reserve a unique scratch path under `dir`. Nothing is created yet.
    pub fn in_dir(dir: &Path) -> Self {
        let path = dir.join(format!("loadgen-scratch-{}.tmp", Uuid::new_v4()));
        Self { path, armed: true }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file and disarm the guard.
    pub async fn remove(mut self) -> Result<(), DiskError> {
        fs::remove_file(&self.path).await.map_err(DiskError::Remove)?;
        self.armed = false;
        Ok(())
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(path = %self.path.display(), error = %e, "Scratch file cleanup failed");
            }
        }
    }
}

/// Outcome of one write-read-delete cycle.
#[derive(Debug)]
pub struct DiskReport {
    pub bytes: usize,
}

impl DiskReport {
    /// Size in whole mebibytes, for the response message.
    pub fn mebibytes(&self) -> usize {
        self.bytes / (1024 * 1024)
    }
}

/// Run one full write-read-delete cycle with a file of `bytes` under `dir`.
///
/// The write phase always runs; nothing is cached or skipped. The read-back
/// length must match the write, otherwise the cycle reports `ShortRead`.
pub async fn run_cycle(dir: &Path, bytes: usize) -> Result<DiskReport, DiskError> {
    let scratch = ScratchFile::in_dir(dir);

    let payload = vec![b'0'; bytes];
    fs::write(scratch.path(), &payload).await.map_err(DiskError::Write)?;

    let read_back = fs::read(scratch.path()).await.map_err(DiskError::Read)?;
    if read_back.len() != bytes {
        return Err(DiskError::ShortRead {
            got: read_back.len(),
            expected: bytes,
        });
    }

    scratch.remove().await?;
    Ok(DiskReport { bytes })
}
