//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders a [`GameSnapshot`](crate::core::GameSnapshot) into a simple
//! framebuffer that is diffed and flushed to the terminal once per frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of drawing types
//! - Redraw only the cells that changed since the last frame
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use neon_tetris_core as core;
pub use neon_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
