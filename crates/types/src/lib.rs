//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (rules engine, terminal rendering, input
//! mapping, tests).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid of tile slots, indexed `(row, col)` with
//! `(0, 0)` at the top-left.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Board side length (4x4 slots) |
//! | `QUEUE_LEN` | 3 | Lookahead queue length after every operation |
//! | `QUEUE_CAP` | 4 | Transient queue capacity during a keep swap |
//! | `HISTORY_CAP` | 40 | Maximum retained undo snapshots |
//! | `INITIAL_TRASH` | 10 | Trash allowance at game start |
//! | `TRASH_PER_LEVEL_UP` | 2 | Trash uses granted on each level-up |
//! | `LEVEL_SCORE_STEP` | 10 | Score points per level |
//! | `MAX_HINTS` | 6 | Maximum hint candidates reported |
//!
//! # Tile Value Pools
//!
//! Each difficulty selects a fixed weighted pool; generation picks uniformly
//! from the pool, so duplicated entries raise a value's odds:
//!
//! - **Easy** skews low (2-9)
//! - **Normal** adds 10 and 12
//! - **Hard** reaches 15, 16 and 18
//!
//! # Examples
//!
//! ```
//! use just_divide_types::{ColorBand, Difficulty, Tile, GRID_SIZE};
//!
//! // Color banding is a pure function of the tile value.
//! assert_eq!(Tile::new(16).band(), ColorBand::Purple);
//! assert_eq!(ColorBand::of(4), ColorBand::Blue);
//!
//! // Unknown difficulty indices fall back to the easiest pool.
//! assert_eq!(Difficulty::from_index(2), Difficulty::Normal);
//! assert_eq!(Difficulty::from_index(9), Difficulty::Easy);
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Board side length (the playfield is `GRID_SIZE` x `GRID_SIZE` slots).
pub const GRID_SIZE: usize = 4;

/// Lookahead queue length after every completed operation.
pub const QUEUE_LEN: usize = 3;

/// Queue capacity. A keep swap pushes the displaced tile to the queue front,
/// transiently growing it to 4 before the next consume restores 3.
pub const QUEUE_CAP: usize = 4;

/// Maximum number of undo snapshots retained (oldest evicted first).
pub const HISTORY_CAP: usize = 40;

/// Trash allowance granted at game start.
pub const INITIAL_TRASH: u32 = 10;

/// Additional trash uses granted on each level-up.
pub const TRASH_PER_LEVEL_UP: u32 = 2;

/// Score points per level: level = score / LEVEL_SCORE_STEP + 1.
pub const LEVEL_SCORE_STEP: u32 = 10;

/// Maximum number of hint candidates reported by a single scan.
pub const MAX_HINTS: usize = 6;

/// Easy tile pool (difficulty 1). Duplicates weight the draw.
pub const EASY_POOL: [u32; 10] = [2, 2, 3, 3, 4, 4, 5, 6, 8, 9];

/// Normal tile pool (difficulty 2).
pub const NORMAL_POOL: [u32; 12] = [2, 3, 3, 4, 4, 5, 6, 6, 8, 9, 10, 12];

/// Hard tile pool (difficulty 3).
pub const HARD_POOL: [u32; 12] = [3, 4, 5, 6, 6, 8, 9, 10, 12, 15, 16, 18];

/// A single tile bearing a positive integer value.
///
/// Tiles are immutable once created; combination produces a new tile. The
/// color band is derived from the value on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u32,
}

impl Tile {
    /// Create a tile. Values below 1 never occur in a well-formed game.
    pub fn new(value: u32) -> Self {
        debug_assert!(value >= 1, "tile values are positive");
        Self { value }
    }

    /// The cosmetic color band for this tile's value.
    pub fn band(self) -> ColorBand {
        ColorBand::of(self.value)
    }
}

/// Cosmetic categorization of a tile value into one of 5 buckets.
///
/// Used only for visual differentiation; game logic never branches on it.
/// The buckets are checked in priority order (first match wins), so the
/// boundary values 4 and 5 land in [`ColorBand::Blue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBand {
    /// Values 1-3.
    Pink,
    /// Values 4-5 (the fall-through bucket).
    Blue,
    /// Values 6-9.
    Orange,
    /// Values 10-14.
    Red,
    /// Values 15 and above.
    Purple,
}

impl ColorBand {
    /// Band a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use just_divide_types::ColorBand;
    ///
    /// assert_eq!(ColorBand::of(2), ColorBand::Pink);
    /// assert_eq!(ColorBand::of(5), ColorBand::Blue);
    /// assert_eq!(ColorBand::of(9), ColorBand::Orange);
    /// assert_eq!(ColorBand::of(12), ColorBand::Red);
    /// assert_eq!(ColorBand::of(18), ColorBand::Purple);
    /// ```
    pub fn of(value: u32) -> Self {
        if value >= 15 {
            ColorBand::Purple
        } else if value >= 10 {
            ColorBand::Red
        } else if value >= 6 {
            ColorBand::Orange
        } else if value <= 3 {
            ColorBand::Pink
        } else {
            ColorBand::Blue
        }
    }
}

/// Difficulty setting selecting the tile value pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Parse a 1-based difficulty index. Unknown indices fall back to
    /// [`Difficulty::Easy`].
    pub fn from_index(index: u8) -> Self {
        match index {
            2 => Difficulty::Normal,
            3 => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// The 1-based index of this difficulty.
    pub fn index(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }

    /// The weighted value pool for this difficulty.
    pub fn pool(self) -> &'static [u32] {
        match self {
            Difficulty::Easy => &EASY_POOL,
            Difficulty::Normal => &NORMAL_POOL,
            Difficulty::Hard => &HARD_POOL,
        }
    }
}

/// Outcome of placing the active tile onto a grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceResult {
    /// Coordinates outside the grid. No state changed.
    OutOfBounds,
    /// Target slot occupied by a non-combinable value. No state changed;
    /// the caller restores the dragged tile's prior position.
    Rejected,
    /// Target slot was empty; the tile now occupies it. No score awarded.
    Placed,
    /// Equal values combined: both tiles consumed, slot now empty.
    Doubled {
        /// Points awarded (twice the tile value).
        award: u32,
    },
    /// Divisible values combined: slot holds the quotient (empty if the
    /// quotient is 1).
    Divided {
        /// The quotient of the larger value by the smaller.
        quotient: u32,
        /// Points awarded (the larger of the two values).
        award: u32,
    },
}

impl PlaceResult {
    /// Whether the placement mutated the grid.
    pub fn is_success(self) -> bool {
        !matches!(self, PlaceResult::OutOfBounds | PlaceResult::Rejected)
    }

    /// Points awarded by this placement (0 for plain placement).
    pub fn award(self) -> u32 {
        match self {
            PlaceResult::Doubled { award } | PlaceResult::Divided { award, .. } => award,
            _ => 0,
        }
    }
}

/// Outcome of moving the active tile into the keep slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepResult {
    /// The keep slot was empty and now holds the tile.
    Stored,
    /// The keep slot was occupied; the previous occupant (carrying this
    /// value) re-enters the queue at the front and becomes the next active
    /// tile.
    Swapped(u32),
}

/// Outcome of a trash request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashResult {
    /// The tile was discarded and the allowance decremented.
    Accepted,
    /// No trash allowance left. No state changed.
    Denied,
}

/// Game status reported after every orchestrated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The game continues.
    Continue,
    /// The move crossed a level boundary; carries the new level.
    LevelUp(u32),
    /// The grid is full with no combinable adjacent pair; carries the final
    /// score.
    GameOver(u32),
}

/// Why a grid cell is a hint candidate for the queue's next tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintReason {
    /// The cell's value equals the upcoming value.
    Equal,
    /// One of the two values divides the other.
    Divisible,
}

/// A candidate target cell where the queue's next tile could combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub row: usize,
    pub col: usize,
    pub reason: HintReason,
}

/// Shell actions applied to the game session and board cursor.
///
/// These are produced by the input layer; the rules engine itself is driven
/// through direct method calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor up one row.
    CursorUp,
    /// Move the board cursor down one row.
    CursorDown,
    /// Move the board cursor left one column.
    CursorLeft,
    /// Move the board cursor right one column.
    CursorRight,
    /// Place the active tile at the cursor.
    Place,
    /// Move the active tile into the keep slot (swapping if occupied).
    Keep,
    /// Discard the active tile (consumes one trash use).
    Trash,
    /// Undo the last committed move.
    Undo,
    /// Restart the game.
    Restart,
    /// Toggle hint markers.
    ToggleHints,
    /// Toggle the pause flag.
    TogglePause,
    /// Select a difficulty by its 1-based index.
    Difficulty(u8),
}
