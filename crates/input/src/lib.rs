//! Input module - maps terminal key events to game actions.
//!
//! Pure mapping only; the shell owns the event loop and applies the
//! resulting actions to the session and board cursor.

pub mod map;

pub use just_divide_types as types;

pub use map::{handle_key_event, should_quit};
