//! Piece shape catalog - spawn-rotation masks and colors
//!
//! Each shape is a 4x4 occupancy mask indexed `[row][column]`, top row first.
//! The color table is index-aligned with the shape table (see
//! [`PieceKind::index`]).

use crate::types::{PieceKind, Rgb};

/// 4x4 occupancy mask, `[row][column]`.
pub type Shape = [[bool; 4]; 4];

const O: bool = false;
const X: bool = true;

/// Spawn-rotation masks in catalog order (I, O, T, S, Z, J, L).
pub const SHAPES: [Shape; 7] = [
    // I
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    // O
    [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // T
    [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // S
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // Z
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    // J
    [[X, X, X, O], [O, O, X, O], [O, O, O, O], [O, O, O, O]],
    // L
    [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
];

/// Piece colors in catalog order.
pub const COLORS: [Rgb; 7] = [
    Rgb::new(0, 255, 255),   // neon cyan (I)
    Rgb::new(255, 255, 128), // soft neon yellow (O)
    Rgb::new(255, 85, 255),  // neon magenta (T)
    Rgb::new(0, 255, 128),   // neon green (S)
    Rgb::new(255, 80, 80),   // neon red (Z)
    Rgb::new(85, 85, 255),   // neon blue (J)
    Rgb::new(255, 160, 0),   // vibrant orange (L)
];

/// Spawn-rotation mask for a piece kind.
pub fn shape_of(kind: PieceKind) -> Shape {
    SHAPES[kind.index()]
}

/// Display color for a piece kind.
pub fn color_of(kind: PieceKind) -> Rgb {
    COLORS[kind.index()]
}

/// Number of set cells in a mask.
pub fn cell_count(shape: &Shape) -> usize {
    shape.iter().flatten().filter(|&&set| set).count()
}
