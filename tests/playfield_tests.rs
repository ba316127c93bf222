//! Playfield tests - grid bounds, filled rows and collapse

use neon_tetris::core::Playfield;
use neon_tetris::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn fill_row(playfield: &mut Playfield, y: i8, color: Rgb) {
    for x in 0..BOARD_WIDTH as i8 {
        playfield.fill_cell(x, y, color);
    }
}

#[test]
fn test_playfield_new_empty() {
    let playfield = Playfield::new();
    assert_eq!(playfield.width(), BOARD_WIDTH);
    assert_eq!(playfield.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(playfield.cell(x, y), Some(Cell::EMPTY), "cell ({x}, {y})");
        }
    }
    assert!(playfield.filled_lines().is_empty());
}

#[test]
fn test_playfield_bounds() {
    assert!(Playfield::in_bounds(0, 0));
    assert!(Playfield::in_bounds(9, 19));
    assert!(!Playfield::in_bounds(-1, 0));
    assert!(!Playfield::in_bounds(0, -1));
    assert!(!Playfield::in_bounds(BOARD_WIDTH as i8, 0));
    assert!(!Playfield::in_bounds(0, BOARD_HEIGHT as i8));

    let playfield = Playfield::new();
    assert_eq!(playfield.cell(-1, 0), None);
    assert_eq!(playfield.cell(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_fill_cell_keeps_color() {
    let mut playfield = Playfield::new();
    playfield.fill_cell(5, 10, RED);

    assert!(playfield.is_cell_filled(5, 10));
    assert_eq!(playfield.cell(5, 10), Some(Cell::filled(RED)));
    assert!(!playfield.is_row_empty(10));
    assert!(!playfield.is_row_full(10));
}

#[test]
fn test_filled_lines_single_row() {
    let mut playfield = Playfield::new();
    fill_row(&mut playfield, 5, RED);
    playfield.fill_cell(0, 6, RED);

    assert_eq!(playfield.filled_lines().as_slice(), &[5]);
}

#[test]
fn test_filled_lines_are_ascending() {
    let mut playfield = Playfield::new();
    for y in [19, 3, 12] {
        fill_row(&mut playfield, y, BLUE);
    }
    assert_eq!(playfield.filled_lines().as_slice(), &[3, 12, 19]);
}

#[test]
fn test_clear_moves_rows_above_down() {
    let mut playfield = Playfield::new();
    playfield.fill_cell(3, 4, BLUE);
    fill_row(&mut playfield, 5, RED);

    playfield.clear_filled_lines_and_collapse(&[5]);

    assert!(playfield.is_cell_filled(3, 5));
    assert_eq!(playfield.cell(3, 5), Some(Cell::filled(BLUE)));
    for x in 0..BOARD_WIDTH as i8 {
        if x != 3 {
            assert!(!playfield.is_cell_filled(x, 5), "({x}, 5)");
        }
    }
    assert!(!playfield.is_cell_filled(3, 4));
    assert!(playfield.is_row_empty(0));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut playfield = Playfield::new();
    playfield.fill_cell(0, 15, RED);
    fill_row(&mut playfield, 16, BLUE);
    playfield.fill_cell(1, 17, RED);
    fill_row(&mut playfield, 18, BLUE);
    playfield.fill_cell(2, 19, RED);

    let lines = playfield.filled_lines();
    playfield.clear_filled_lines_and_collapse(&lines);

    // Row 19 untouched, row 17 drops one, row 15 drops two.
    assert!(playfield.is_cell_filled(2, 19));
    assert!(playfield.is_cell_filled(1, 18));
    assert!(playfield.is_cell_filled(0, 17));
    assert!(playfield.is_row_empty(16));
    assert!(playfield.filled_lines().is_empty());
}

#[test]
fn test_clear_four_bottom_rows() {
    let mut playfield = Playfield::new();
    for y in 16..20 {
        fill_row(&mut playfield, y, RED);
    }
    playfield.fill_cell(4, 15, BLUE);

    playfield.clear_filled_lines_and_collapse(&[16, 17, 18, 19]);

    assert!(playfield.is_cell_filled(4, 19));
    assert_eq!(playfield.cells().iter().filter(|c| c.filled).count(), 1);
}

#[test]
fn test_write_grid_and_reset() {
    let mut playfield = Playfield::new();
    playfield.fill_cell(9, 19, RED);

    let mut grid = [[Cell::EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    playfield.write_grid(&mut grid);
    assert_eq!(grid[19][9], Cell::filled(RED));

    playfield.reset();
    assert!(playfield.cells().iter().all(|c| !c.filled));
}
