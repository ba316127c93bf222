//! Terminal input module.
//!
//! Maps `crossterm` key events onto the core's logical [`Key`]s and keeps a
//! held-key table that the game samples once per tick through
//! [`KeyboardSource`]. Terminals that report key releases (keyboard
//! enhancement) release keys exactly; elsewhere a short timeout releases keys
//! that have not been re-reported.

pub mod keyboard;
pub mod map;

pub use neon_tetris_core as core;
pub use neon_tetris_core::{Key, KeyboardSource};

pub use keyboard::{disable_release_events, enable_release_events, TerminalKeyboard};
pub use map::{map_key_event, should_quit};
