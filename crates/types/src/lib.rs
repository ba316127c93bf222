//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, audio, logging).
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: (3, -1) for most pieces; pieces enter the field from
//!   the hidden row above it
//!
//! # Timing Constants
//!
//! Timing values are [`Duration`]s so that accumulating fixed steps stays exact:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIXED_STEP` | 1/60 s | Simulation step |
//! | `MAX_FRAME_TIME` | 250ms | Clamp on wall-clock time fed into one frame |
//! | `BASE_FALL_DELAY` | 800ms | Gravity at level 0 |
//! | `FALL_DELAY_DECREASE_PER_LEVEL` | 70ms | Gravity speed-up per level |
//! | `MIN_FALL_DELAY` | 100ms | Fastest gravity |
//! | `MOVE_INITIAL_DELAY` | 170ms | Hold time before the first auto-repeat |
//! | `MOVE_REPEAT_DELAY` | 50ms | Interval between auto-repeats |
//! | `LINE_FLASH_DURATION` | 480ms | Flash shown before filled rows clear |
//! | `LINE_FLASH_INTERVALS` | 6 | On/off intervals within the flash |
//!
//! # Examples
//!
//! ```
//! use neon_tetris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::ALL[piece.index()], piece);
//! assert_eq!(piece.index(), 2);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::time::Duration;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed simulation step (1/60 second).
pub const FIXED_STEP: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Upper bound on wall-clock time accumulated per frame.
///
/// A stalled terminal (or a debugger pause) would otherwise queue hundreds of
/// catch-up steps.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(250);

/// Gravity interval at level 0.
pub const BASE_FALL_DELAY: Duration = Duration::from_millis(800);

/// Gravity interval reduction per level.
pub const FALL_DELAY_DECREASE_PER_LEVEL: Duration = Duration::from_millis(70);

/// Gravity interval floor.
pub const MIN_FALL_DELAY: Duration = Duration::from_millis(100);

/// Hold time before a held direction starts auto-repeating.
pub const MOVE_INITIAL_DELAY: Duration = Duration::from_millis(170);

/// Interval between auto-repeated moves.
pub const MOVE_REPEAT_DELAY: Duration = Duration::from_millis(50);

/// Total time filled rows flash before they are cleared.
pub const LINE_FLASH_DURATION: Duration = Duration::from_millis(480);

/// Number of equal on/off intervals within [`LINE_FLASH_DURATION`].
pub const LINE_FLASH_INTERVALS: u32 = 6;

/// Lines required per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `self` towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Color of an unfilled playfield cell.
pub const EMPTY_CELL_COLOR: Rgb = Rgb::new(25, 26, 27);

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Neon cyan, horizontal bar
/// - **O**: Soft neon yellow, 2x2 square
/// - **T**: Neon magenta, T-shaped
/// - **S**: Neon green, S-shaped
/// - **Z**: Neon red, Z-shaped (mirror of S)
/// - **J**: Neon blue, J-shaped
/// - **L**: Vibrant orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in the shape and color catalogs.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// A cell on the playfield: occupancy flag plus the color it is drawn with.
///
/// Empty cells carry [`EMPTY_CELL_COLOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub filled: bool,
    pub color: Rgb,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        filled: false,
        color: EMPTY_CELL_COLOR,
    };

    pub const fn filled(color: Rgb) -> Self {
        Self {
            filled: true,
            color,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Logical sound effect identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    GameStart,
    Collision,
    LineClear,
    LevelUp,
    Pause,
    GameOver,
}

impl SoundId {
    pub const ALL: [SoundId; 6] = [
        SoundId::GameStart,
        SoundId::Collision,
        SoundId::LineClear,
        SoundId::LevelUp,
        SoundId::Pause,
        SoundId::GameOver,
    ];

    /// Stable snake_case name, used for asset file names and log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundId::GameStart => "game_start",
            SoundId::Collision => "collision",
            SoundId::LineClear => "line_clear",
            SoundId::LevelUp => "level_up",
            SoundId::Pause => "pause",
            SoundId::GameOver => "game_over",
        }
    }
}
