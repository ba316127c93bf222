//! Piece tests - placement validity, atomic moves and wall kicks

use neon_tetris::core::catalog::cell_count;
use neon_tetris::core::piece::{rotate_mask_ccw, rotate_mask_cw};
use neon_tetris::core::{color_of, shape_of, Playfield, Position, Tetromino};
use neon_tetris::types::{PieceKind, Rgb, BOARD_WIDTH};

const GREY: Rgb = Rgb::new(90, 90, 90);

fn at(kind: PieceKind, x: i8, y: i8) -> Tetromino {
    Tetromino::new(kind).with_position(Position::new(x, y))
}

#[test]
fn test_every_kind_has_four_cells_in_every_rotation() {
    for kind in PieceKind::ALL {
        let mut shape = shape_of(kind);
        for _ in 0..4 {
            assert_eq!(cell_count(&shape), 4, "{kind:?}");
            shape = rotate_mask_cw(kind, &shape);
        }
        assert_eq!(shape, shape_of(kind), "{kind:?} returns after four turns");
    }
}

#[test]
fn test_ccw_undoes_cw() {
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        let turned = rotate_mask_cw(kind, &shape);
        assert_eq!(rotate_mask_ccw(kind, &turned), shape, "{kind:?}");
    }
}

#[test]
fn test_new_piece_uses_catalog() {
    let piece = Tetromino::new(PieceKind::S);
    assert_eq!(*piece.shape(), shape_of(PieceKind::S));
    assert_eq!(piece.color(), color_of(PieceKind::S));
}

#[test]
fn test_valid_position_in_open_field() {
    let playfield = Playfield::new();
    assert!(at(PieceKind::T, 3, 5).is_at_valid_position(&playfield));
    assert!(at(PieceKind::O, 8, 18).is_at_valid_position(&playfield));
}

#[test]
fn test_invalid_when_out_of_bounds() {
    let playfield = Playfield::new();
    assert!(!at(PieceKind::O, 9, 5).is_at_valid_position(&playfield));
    assert!(!at(PieceKind::O, -1, 5).is_at_valid_position(&playfield));
    assert!(!at(PieceKind::O, 4, 19).is_at_valid_position(&playfield));
    // Top row above the field is outside the grid too.
    assert!(!at(PieceKind::T, 3, -1).is_at_valid_position(&playfield));
}

#[test]
fn test_invalid_when_overlapping_filled_cell() {
    let mut playfield = Playfield::new();
    playfield.fill_cell(4, 6, GREY);
    assert!(!at(PieceKind::T, 3, 5).is_at_valid_position(&playfield));
    assert!(at(PieceKind::T, 3, 3).is_at_valid_position(&playfield));
}

#[test]
fn test_try_move_is_atomic() {
    let playfield = Playfield::new();
    let mut piece = at(PieceKind::O, 0, 10);

    assert!(!piece.try_move(-1, 0, &playfield));
    assert_eq!(piece.position(), Position::new(0, 10));

    assert!(piece.try_move(1, 1, &playfield));
    assert_eq!(piece.position(), Position::new(1, 11));
}

#[test]
fn test_try_move_blocked_by_floor() {
    let playfield = Playfield::new();
    let mut piece = at(PieceKind::O, 4, 18);
    assert!(!piece.try_move(0, 1, &playfield));
    assert_eq!(piece.position().y, 18);
}

#[test]
fn test_rotation_in_open_field() {
    let playfield = Playfield::new();
    let mut piece = at(PieceKind::T, 3, 5);
    assert!(piece.try_rotate_cw(&playfield));
    assert_eq!(*piece.shape(), rotate_mask_cw(PieceKind::T, &shape_of(PieceKind::T)));
    assert_eq!(piece.position(), Position::new(3, 5));
}

#[test]
fn test_rotation_kicks_left_when_blocked() {
    let mut playfield = Playfield::new();
    // Blocks the stem of the rotated T but not the nudged one.
    playfield.fill_cell(4, 7, GREY);

    let mut piece = at(PieceKind::T, 3, 5);
    assert!(piece.try_rotate_cw(&playfield));
    assert_eq!(piece.position(), Position::new(2, 5));
    assert_eq!(*piece.shape(), rotate_mask_cw(PieceKind::T, &shape_of(PieceKind::T)));
}

#[test]
fn test_rotation_kicks_off_left_wall() {
    let playfield = Playfield::new();
    let vertical = rotate_mask_cw(PieceKind::T, &shape_of(PieceKind::T));
    let mut piece = at(PieceKind::T, 3, 5);
    assert!(piece.try_rotate_cw(&playfield));
    assert_eq!(*piece.shape(), vertical);

    // Stem in column 0: the next turn needs column -1, so it nudges right.
    let mut piece = piece.with_position(Position::new(-1, 5));
    assert!(piece.is_at_valid_position(&playfield));
    assert!(piece.try_rotate_cw(&playfield));
    assert_eq!(piece.position(), Position::new(0, 5));
}

#[test]
fn test_failed_rotation_reverts_shape_and_position() {
    let mut playfield = Playfield::new();
    for x in 0..BOARD_WIDTH as i8 {
        playfield.fill_cell(x, 7, GREY);
    }

    let mut piece = at(PieceKind::T, 3, 5);
    let before = piece;
    assert!(!piece.try_rotate_cw(&playfield));
    assert_eq!(piece, before);
}

#[test]
fn test_o_rotation_is_noop() {
    let playfield = Playfield::new();
    let mut piece = at(PieceKind::O, 4, 5);
    let before = piece;
    assert!(piece.try_rotate_cw(&playfield));
    assert_eq!(piece, before);
}

#[test]
fn test_i_toggles_between_row_and_column() {
    let playfield = Playfield::new();
    let mut piece = at(PieceKind::I, 3, 5);
    assert!(piece.try_rotate_cw(&playfield));
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(4, 5), (4, 6), (4, 7), (4, 8)]);

    assert!(piece.try_rotate_cw(&playfield));
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(3, 6), (4, 6), (5, 6), (6, 6)]);
}

#[test]
fn test_lock_writes_color_and_skips_hidden_cells() {
    let mut playfield = Playfield::new();
    let piece = at(PieceKind::T, 3, -1);
    let hidden = piece.lock_into(&mut playfield);

    assert_eq!(hidden, 1);
    assert!(playfield.is_cell_filled(3, 0));
    assert!(playfield.is_cell_filled(4, 0));
    assert!(playfield.is_cell_filled(5, 0));
    assert_eq!(playfield.cell(4, 0).map(|c| c.color), Some(color_of(PieceKind::T)));
}
