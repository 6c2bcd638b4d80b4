//! Process-wide memory accumulator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Append-only store of filler buffers, grown by `/memory` calls.
///
/// Buffers are never released for the life of the process, so resident size
/// is monotonically non-decreasing across calls. The only legal transition
/// is append; the lock is held only for the push.
pub struct MemoryHog {
    chunks: Mutex<Vec<Box<[u8]>>>,
    total_bytes: AtomicUsize,
}

impl MemoryHog {
    pub fn new() -> Self {
        Self {
            chunks: Mutex::new(Vec::new()),
            total_bytes: AtomicUsize::new(0),
        }
    }

    /// Allocate and retain `bytes` of filler, returning the new total.
    ///
    /// Every byte is written so the pages are actually committed and the
    /// growth shows up in RSS rather than staying virtual.
    pub fn grow(&self, bytes: usize) -> usize {
        let chunk = vec![0x20u8; bytes].into_boxed_slice();
        self.chunks
            .lock()
            .expect("memory accumulator mutex poisoned")
            .push(chunk);
        self.total_bytes.fetch_add(bytes, Ordering::Relaxed) + bytes
    }

    /// Total bytes retained so far.
    pub fn total_bytes(&self) -> usize {
        self.total_bytes.load(Ordering::Relaxed)
    }

    /// Number of buffers retained so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks
            .lock()
            .expect("memory accumulator mutex poisoned")
            .len()
    }
}

impl Default for MemoryHog {
    fn default() -> Self {
        Self::new()
    }
}
