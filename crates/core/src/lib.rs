//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management, and simulation logic.
//! It has **zero dependencies** on rendering, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed and the same input samples produce identical games
//! - **Testable**: Scripted keyboard sources drive whole games in unit tests
//! - **Portable**: Any surface can draw a [`GameSnapshot`]
//! - **Fast**: Fixed-size grids and bags, no allocation on the tick path
//!
//! # Module Structure
//!
//! - [`catalog`]: The seven spawn-rotation shapes and their colors
//! - [`piece`]: Tetromino position, movement and rotation with simple wall kicks
//! - [`rng`]: Seeded LCG and the two-bag piece generator
//! - [`playfield`]: 10x20 grid with filled-row detection and collapse
//! - [`scoring`]: Classic line scores, level and fall-delay progression
//! - [`rules`]: Tunable timing and scoring values
//! - [`input`]: Per-tick key state with press/release edges
//! - [`timestep`]: Wall-clock accumulator producing fixed steps
//! - [`game`]: Screen state machine and per-tick gameplay
//! - [`events`]: Side-effect notifications drained by the application
//! - [`snapshot`]: Read-only view of the game for renderers
//!
//! # Game Rules
//!
//! - **Two-bag generator**: every kind appears once per bag of 7
//! - **Rotation**: clockwise only; I toggles, O is fixed, the rest rotate a 3x3
//!   box; blocked rotations try nudges of -1, +1, -2, +2 columns
//! - **Auto-repeat**: held directions repeat after 170ms, then every 50ms
//! - **Instant lock**: a blocked downward move locks the piece immediately
//! - **Line flash**: filled rows flash for 480ms before they clear
//! - **Scoring**: Classic Nintendo scoring, level every 10 lines
//!
//! # Example
//!
//! ```
//! use neon_tetris_core::{Game, InputState, Key, Screen};
//!
//! let mut game = Game::new(12345);
//! let mut input = InputState::new();
//!
//! // Confirm fires on release.
//! input.update_with(&[Key::Confirm]);
//! game.update(&input);
//! input.update_with(&[]);
//! game.update(&input);
//! assert_eq!(game.screen(), Screen::InGame);
//!
//! input.update_with(&[Key::Left]);
//! game.update(&input);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Drive [`Game::update`] once per [`FixedTimestep`] step (1/60 s by default);
//! render once per frame from [`Game::snapshot_into`].

pub use neon_tetris_types as types;

pub mod catalog;
pub mod events;
pub mod game;
pub mod input;
pub mod piece;
pub mod playfield;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod timestep;

pub use catalog::{color_of, shape_of, Shape};
pub use events::GameEvent;
pub use game::{Game, Screen};
pub use input::{InputState, Key, KeyboardSource};
pub use piece::{Position, Tetromino};
pub use playfield::Playfield;
pub use rng::{SimpleRng, TetrominoGenerator};
pub use rules::Rules;
pub use scoring::{calculate_level, calculate_line_score, fall_delay_for_level, Progress};
pub use snapshot::{FlashSnapshot, GameSnapshot, PieceSnapshot};
pub use timestep::FixedTimestep;
