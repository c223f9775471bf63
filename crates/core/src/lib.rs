//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state management, and move
//! orchestration. It has **zero dependencies** on UI, timers, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 playfield with placement and the combination rule
//! - [`queue`]: always-length-3 lookahead buffer and tile supply
//! - [`rng`]: deterministic tile generation from difficulty pools
//! - [`progress`]: score/level/best-score arithmetic
//! - [`history`]: bounded snapshot stack backing single-step undo
//! - [`hints`]: read-only scan for combinable targets
//! - [`session`]: the top-level [`GameSession`] tying everything together
//!
//! # Game Rules
//!
//! A 4x4 grid accepts tiles bearing integer values. Dropping a tile onto an
//! occupied slot combines by equality (both consumed, award twice the
//! value) or by divisibility (slot collapses to the quotient, award the
//! larger value); anything else is rejected without side effects. A
//! three-tile lookahead queue feeds one active tile at a time; a one-slot
//! keep buffer and a finite trash allowance give the player escape valves.
//! The game ends when the grid is full and no adjacent pair can combine.
//!
//! # Example
//!
//! ```
//! use just_divide_core::GameSession;
//! use just_divide_types::PlaceResult;
//!
//! let mut game = GameSession::new(12345);
//!
//! // Place the active tile on an empty slot: no points, next tile up.
//! assert_eq!(game.try_place(0, 0), PlaceResult::Placed);
//! assert!(game.active().is_some());
//! assert_eq!(game.queue_tiles().len(), 3);
//!
//! // One-step undo restores the pre-move state.
//! game.undo().unwrap();
//! assert_eq!(game.grid().tile(0, 0), None);
//! ```

pub mod grid;
pub mod hints;
pub mod history;
pub mod progress;
pub mod queue;
pub mod rng;
pub mod session;

pub use just_divide_types as types;

// Re-export commonly used types for convenience
pub use grid::{can_combine, Grid};
pub use hints::HintList;
pub use history::{History, Snapshot};
pub use queue::TileQueue;
pub use rng::{SimpleRng, TileGenerator};
pub use session::{BestSaver, GameSession};
