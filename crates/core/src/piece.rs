//! Piece module - a tetromino's mask, position and movement rules
//!
//! A piece is a 4x4 occupancy mask anchored at its top-left corner in grid
//! coordinates. Every move or rotation is tentative: it is validated against
//! the playfield and rolled back in full when invalid.
//!
//! Rotation is a dispatch on kind:
//! - **O** is symmetric and never changes.
//! - **I** toggles between its horizontal (row 1) and vertical (column 1)
//!   states; rotating a 1-thick line inside a 4x4 box would otherwise drift.
//! - Every other kind rotates its inner 3x3 submatrix.
//!
//! A rotation that collides tries horizontal nudges of -1, +1, -2, +2
//! columns (a simple wall kick) before giving up.

use crate::catalog::{color_of, shape_of, Shape};
use crate::playfield::Playfield;
use crate::types::{PieceKind, Rgb};

/// Horizontal nudges tried, in order, after a rotation collides.
pub const KICK_OFFSETS: [i8; 4] = [-1, 1, -2, 2];

/// Top-left anchor for spawning pieces.
///
/// The top row of every spawn mask starts one row above the visible field.
pub const SPAWN_POSITION: Position = Position { x: 3, y: -1 };

/// Grid coordinates of the top-left corner of a piece's 4x4 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Spawn anchor for a kind.
///
/// I and O are offset so all seven kinds center the same way in their box.
pub fn spawn_position(kind: PieceKind) -> Position {
    match kind {
        PieceKind::I => Position::new(SPAWN_POSITION.x, SPAWN_POSITION.y - 1),
        PieceKind::O => Position::new(SPAWN_POSITION.x + 1, SPAWN_POSITION.y),
        _ => SPAWN_POSITION,
    }
}

/// Rotate a mask 90° clockwise following the per-kind rules.
pub fn rotate_mask_cw(kind: PieceKind, shape: &Shape) -> Shape {
    match kind {
        PieceKind::O => *shape,
        PieceKind::I => toggle_line(shape),
        _ => {
            let mut rotated = [[false; 4]; 4];
            for (y, row) in shape.iter().take(3).enumerate() {
                for (x, &set) in row.iter().take(3).enumerate() {
                    rotated[x][2 - y] = set;
                }
            }
            rotated
        }
    }
}

/// Rotate a mask 90° counter-clockwise; the exact inverse of [`rotate_mask_cw`].
pub fn rotate_mask_ccw(kind: PieceKind, shape: &Shape) -> Shape {
    match kind {
        PieceKind::O => *shape,
        PieceKind::I => toggle_line(shape),
        _ => {
            let mut rotated = [[false; 4]; 4];
            for (y, row) in shape.iter().take(3).enumerate() {
                for (x, &set) in row.iter().take(3).enumerate() {
                    rotated[2 - x][y] = set;
                }
            }
            rotated
        }
    }
}

fn toggle_line(shape: &Shape) -> Shape {
    let mut rotated = [[false; 4]; 4];
    let horizontal = shape[1][0];
    for i in 0..4 {
        if horizontal {
            rotated[i][1] = true;
        } else {
            rotated[1][i] = true;
        }
    }
    rotated
}

/// The falling piece (and the "next" preview).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    shape: Shape,
    position: Position,
    color: Rgb,
}

impl Tetromino {
    /// Create a piece of `kind` at its spawn position, in spawn rotation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            position: spawn_position(kind),
            color: color_of(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Place the piece at an explicit position without validation.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Absolute grid coordinates of every occupied cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let Position { x, y } = self.position;
        self.shape.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &set)| set)
                .map(move |(dx, _)| (x + dx as i8, y + dy as i8))
        })
    }

    /// Every occupied cell lies on the grid over an unfilled cell.
    pub fn is_at_valid_position(&self, playfield: &Playfield) -> bool {
        self.cells()
            .all(|(x, y)| Playfield::in_bounds(x, y) && !playfield.is_cell_filled(x, y))
    }

    /// Move by (dx, dy) if the destination is valid.
    pub fn try_move(&mut self, dx: i8, dy: i8, playfield: &Playfield) -> bool {
        let original = self.position;
        self.position = Position::new(original.x + dx, original.y + dy);
        if self.is_at_valid_position(playfield) {
            return true;
        }
        self.position = original;
        false
    }

    /// Rotate clockwise, falling back to the horizontal kicks in
    /// [`KICK_OFFSETS`]. On failure shape and position are left untouched.
    pub fn try_rotate_cw(&mut self, playfield: &Playfield) -> bool {
        let original_shape = self.shape;
        let original_position = self.position;

        self.shape = rotate_mask_cw(self.kind, &self.shape);
        if self.is_at_valid_position(playfield) {
            return true;
        }

        for dx in KICK_OFFSETS {
            self.position = Position::new(original_position.x + dx, original_position.y);
            if self.is_at_valid_position(playfield) {
                return true;
            }
        }

        self.position = original_position;
        self.shape = rotate_mask_ccw(self.kind, &self.shape);
        debug_assert_eq!(self.shape, original_shape);
        false
    }

    /// Write the piece's cells into the playfield with its color.
    ///
    /// Cells above the visible field are skipped; returns how many were.
    pub fn lock_into(&self, playfield: &mut Playfield) -> usize {
        let mut hidden = 0;
        for (x, y) in self.cells() {
            if y < 0 {
                hidden += 1;
                continue;
            }
            playfield.fill_cell(x, y, self.color);
        }
        hidden
    }
}
