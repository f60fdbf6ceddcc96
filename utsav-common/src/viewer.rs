//! Media viewer state machine
//!
//! The modal viewer navigates the flattened media sequence. It is either
//! closed or open at a valid index; while open, `0 <= current < items.len()`
//! always holds. All transitions are synchronous with no side effects beyond
//! the state itself. Closing discards the index, so the next open always
//! resolves from the requested item rather than resuming a stale position.

use crate::flatten::FlattenedMediaEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open { current: usize },
}

/// Modal media viewer over an owned flattened sequence
#[derive(Debug, Clone)]
pub struct MediaViewer {
    items: Vec<FlattenedMediaEntry>,
    phase: Phase,
}

impl MediaViewer {
    /// Create a closed viewer over a flattened media sequence
    pub fn new(items: Vec<FlattenedMediaEntry>) -> Self {
        Self {
            items,
            phase: Phase::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    /// Current index while open
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Open { current } => Some(current),
            Phase::Closed => None,
        }
    }

    /// Entry under the cursor while open
    pub fn current_entry(&self) -> Option<&FlattenedMediaEntry> {
        self.current_index().map(|i| &self.items[i])
    }

    pub fn items(&self) -> &[FlattenedMediaEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve the index `request_open` would land on, without opening.
    ///
    /// First entry whose URL matches; an unmatched URL falls back to 0 on a
    /// non-empty sequence; an empty sequence has no index.
    pub fn resolve_open_index(&self, clicked_url: &str) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(
            self.items
                .iter()
                .position(|item| item.url == clicked_url)
                .unwrap_or(0),
        )
    }

    /// Open at the entry matching `clicked_url`.
    ///
    /// An unmatched URL degrades to opening at index 0; opening on an empty
    /// sequence is rejected silently and the viewer stays closed. Returns
    /// whether the viewer is open afterwards.
    pub fn request_open(&mut self, clicked_url: &str) -> bool {
        match self.resolve_open_index(clicked_url) {
            Some(index) => {
                self.phase = Phase::Open { current: index };
                true
            }
            None => false,
        }
    }

    /// Close the viewer, discarding the current index
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }

    /// Advance with wraparound; no-op when closed or when length <= 1
    pub fn next(&mut self) {
        if let Phase::Open { current } = self.phase {
            if self.items.len() > 1 {
                self.phase = Phase::Open {
                    current: (current + 1) % self.items.len(),
                };
            }
        }
    }

    /// Step back with wraparound; no-op when closed or when length <= 1
    pub fn previous(&mut self) {
        if let Phase::Open { current } = self.phase {
            let len = self.items.len();
            if len > 1 {
                self.phase = Phase::Open {
                    current: (current + len - 1) % len,
                };
            }
        }
    }

    /// Jump to an absolute index (swipe gestures report a landing index).
    ///
    /// Only valid while open and within bounds; returns whether the jump
    /// was applied.
    pub fn jump_to(&mut self, index: usize) -> bool {
        match self.phase {
            Phase::Open { .. } if index < self.items.len() => {
                self.phase = Phase::Open { current: index };
                true
            }
            _ => false,
        }
    }
}
