//! Just Divide (workspace facade crate).
//!
//! This package keeps a single `just_divide::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.
//! The shell-side glue ([`app`]) lives here with the binary.

pub mod app;

pub use just_divide_core as core;
pub use just_divide_input as input;
pub use just_divide_term as term;
pub use just_divide_types as types;
