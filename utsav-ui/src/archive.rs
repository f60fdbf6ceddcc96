//! Last-requested-wins year navigation state
//!
//! One fetch round trip runs per year navigation. A navigation to a
//! different year while a fetch is in flight supersedes it: the stale
//! response must not overwrite newer state when it finally arrives. Each
//! load takes a generation token up front and may only store its result
//! while that token is still the newest one.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use utsav_common::YearRecord;

/// The most recently loaded year view source
#[derive(Debug, Clone)]
pub struct LoadedYear {
    pub year: i32,
    pub record: YearRecord,
    /// False when the fetch failed and the default record was substituted
    pub loaded: bool,
}

/// Shared per-page archive state with supersede protection
pub struct ArchiveState {
    /// Generation of the newest load ever begun
    generation: AtomicU64,
    current: RwLock<Option<LoadedYear>>,
}

impl ArchiveState {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    /// Begin a load, superseding any load still in flight.
    ///
    /// Returns the generation token the caller must present to
    /// [`complete_load`](Self::complete_load).
    pub fn begin_load(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store a finished load unless a newer one has begun since.
    ///
    /// Returns whether the result was stored; a superseded result is
    /// discarded without touching the current state.
    pub async fn complete_load(&self, token: u64, loaded: LoadedYear) -> bool {
        if token != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        let mut current = self.current.write().await;
        // Re-check under the lock: a newer load may have begun meanwhile
        if token != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        *current = Some(loaded);
        true
    }

    /// The newest stored load, if any year has been displayed yet
    pub async fn current(&self) -> Option<LoadedYear> {
        self.current.read().await.clone()
    }
}

impl Default for ArchiveState {
    fn default() -> Self {
        Self::new()
    }
}
