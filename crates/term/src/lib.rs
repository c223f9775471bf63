//! Terminal rendering for the game shell.
//!
//! [`TerminalRenderer`] owns the raw-mode/alternate-screen lifecycle;
//! [`game_view`] encodes a full frame from a session. Rendering is strictly
//! read-only over the core.

pub mod game_view;
pub mod renderer;

pub use game_view::{band_color, encode_frame, format_time};
pub use renderer::TerminalRenderer;
