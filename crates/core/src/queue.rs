//! Queue module - the lookahead tile supply
//!
//! The queue holds the upcoming tiles in FIFO order and owns the tile
//! generator; nothing else in the engine draws tiles directly. After every
//! completed operation the queue is exactly [`QUEUE_LEN`] long. A keep swap
//! may push the displaced tile to the front, transiently growing the queue
//! to [`QUEUE_CAP`]; the next consume restores the invariant, and refills
//! only grow, never truncate.

use arrayvec::ArrayVec;

use crate::rng::TileGenerator;
use just_divide_types::{Difficulty, Tile, QUEUE_CAP, QUEUE_LEN};

/// Fixed-capacity buffer of queued tiles.
pub type TileBuf = ArrayVec<Tile, QUEUE_CAP>;

/// Ordered lookahead buffer, refilled from its own generator.
#[derive(Debug, Clone)]
pub struct TileQueue {
    tiles: TileBuf,
    generator: TileGenerator,
}

impl TileQueue {
    /// Create a queue seeded for determinism, pre-filled to length 3.
    pub fn new(seed: u32, difficulty: Difficulty) -> Self {
        let mut queue = Self {
            tiles: TileBuf::new(),
            generator: TileGenerator::new(seed),
        };
        queue.refill(difficulty);
        queue
    }

    /// Remove and return the front tile, or `None` if the queue is empty.
    ///
    /// Callers that need the length-3 invariant back must refill afterwards;
    /// [`TileQueue::draw`] bundles both.
    pub fn consume_front(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        Some(self.tiles.remove(0))
    }

    /// Append generated tiles until the queue is [`QUEUE_LEN`] long.
    ///
    /// A no-op when the queue is already at or above that length.
    pub fn refill(&mut self, difficulty: Difficulty) {
        while self.tiles.len() < QUEUE_LEN {
            let tile = self.generator.generate(difficulty);
            self.tiles.push(tile);
        }
    }

    /// Consume the front tile and refill back to length 3.
    ///
    /// An empty queue is unreachable through the public surface, but if it
    /// ever happens a replacement tile is generated on the spot rather than
    /// failing the move.
    pub fn draw(&mut self, difficulty: Difficulty) -> Tile {
        let tile = self
            .consume_front()
            .unwrap_or_else(|| self.generator.generate(difficulty));
        self.refill(difficulty);
        tile
    }

    /// Insert a tile at the front so it becomes the very next one consumed.
    ///
    /// Precondition: at most one `push_front` between consumes; the buffer
    /// holds one tile beyond the steady-state length and a second push
    /// without an intervening consume panics.
    pub fn push_front(&mut self, tile: Tile) {
        self.tiles.insert(0, tile);
    }

    /// The tile that will become active next.
    pub fn front(&self) -> Option<Tile> {
        self.tiles.first().copied()
    }

    /// The queued tiles in consumption order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of queued tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the queue holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Replace the buffer contents (undo rehydration).
    pub fn restore(&mut self, tiles: &[Tile]) {
        self.tiles.clear();
        self.tiles.extend(tiles.iter().copied());
    }

    /// Current generator state (for restarting with a fresh sequence).
    pub fn rng_state(&self) -> u32 {
        self.generator.state()
    }
}
