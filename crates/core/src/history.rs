//! History module - bounded snapshot stack for single-step undo
//!
//! Every mutable field of a game is captured in a [`Snapshot`] before each
//! move commits, so "undo" means "restore the state immediately prior to
//! the last committed move". Snapshots are plain value clones of a small,
//! fully-enumerated struct; nothing is shared with live state.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::queue::TileBuf;
use just_divide_types::{Tile, HISTORY_CAP};

/// Deep copy of all mutable game state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub queue: TileBuf,
    pub active: Option<Tile>,
    pub keep: Option<Tile>,
    pub score: u32,
    pub level: u32,
    pub trash_count: u32,
    pub timer_sec: u32,
}

impl Snapshot {
    /// Assemble a snapshot from borrowed live state.
    #[allow(clippy::too_many_arguments)]
    pub fn capture(
        grid: &Grid,
        queue: &[Tile],
        active: Option<Tile>,
        keep: Option<Tile>,
        score: u32,
        level: u32,
        trash_count: u32,
        timer_sec: u32,
    ) -> Self {
        let mut buf = TileBuf::new();
        buf.extend(queue.iter().copied());
        Self {
            grid: grid.clone(),
            queue: buf,
            active,
            keep,
            score,
            level,
            trash_count,
            timer_sec,
        }
    }
}

/// Bounded, ordered sequence of snapshots.
///
/// Holds at most [`HISTORY_CAP`] entries; the oldest is evicted first. The
/// first entry is the sentinel initial state and always survives, so a
/// fresh game cannot be undone into nothing.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    /// Start a history with the sentinel initial snapshot.
    pub fn new(initial: Snapshot) -> Self {
        let mut entries = Vec::with_capacity(HISTORY_CAP);
        entries.push(initial);
        Self { entries }
    }

    /// Append a snapshot, evicting the oldest entry past the cap.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
        if self.entries.len() > HISTORY_CAP {
            self.entries.remove(0);
        }
    }

    /// Pop the current top and return the prior state to rehydrate into.
    ///
    /// No-op returning `None` when only the sentinel remains. Rehydration
    /// is the caller's job; history only stores and orders.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.entries.last()
    }

    /// Drop everything and reseed with a fresh initial snapshot.
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push(initial);
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Histories always hold at least the sentinel.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
