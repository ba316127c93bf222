//! Neon Tetris (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `neon_tetris::{types, core, input, term, audio}` and
//! holds the application shell shared by the binary and integration tests:
//! environment configuration, the JSON-lines event log and the mapping from
//! game events to sound effects.

pub use neon_tetris_audio as audio;
pub use neon_tetris_core as core;
pub use neon_tetris_input as input;
pub use neon_tetris_term as term;
pub use neon_tetris_types as types;

pub mod config;
pub mod event_log;
pub mod sfx;
