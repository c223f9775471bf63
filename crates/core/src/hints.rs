//! Hints module - read-only scan for combinable targets
//!
//! Given the queue's upcoming tile value, finds occupied cells the player
//! could drop it onto for a combination. The scan is row-major over source
//! cells, then up/down/left/right over neighbors; the reported coordinates
//! are the neighbor's (the drop target), and the list is cut at
//! [`MAX_HINTS`] candidates. Pure and allocation-free; the enabled/disabled
//! toggle lives in the session.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use just_divide_types::{Hint, HintReason, GRID_SIZE, MAX_HINTS};

/// Fixed-capacity list of hint candidates.
pub type HintList = ArrayVec<Hint, MAX_HINTS>;

/// Collect up to [`MAX_HINTS`] cells where `upcoming` could combine.
pub fn compute(grid: &Grid, upcoming: u32) -> HintList {
    let mut hints = HintList::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if grid.tile(row, col).is_none() {
                continue;
            }
            for (nr, nc) in neighbors(row, col) {
                let Some(neighbor) = grid.tile(nr, nc) else {
                    continue;
                };
                let w = neighbor.value;
                let reason = if w == upcoming {
                    HintReason::Equal
                } else if w.max(upcoming) % w.min(upcoming) == 0 {
                    HintReason::Divisible
                } else {
                    continue;
                };
                hints.push(Hint {
                    row: nr,
                    col: nc,
                    reason,
                });
                if hints.len() == MAX_HINTS {
                    return hints;
                }
            }
        }
    }

    hints
}

/// In-bounds 4-connected neighbors in up/down/left/right order.
fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let candidates = [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ];
    candidates
        .into_iter()
        .filter(|&(r, c)| r < GRID_SIZE && c < GRID_SIZE)
}
