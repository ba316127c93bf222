//! Playfield module - manages the game grid
//!
//! The playfield is a 10x20 grid where each cell is either empty or filled
//! with the color of the piece that locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Out-of-bounds access is a caller bug: it trips a `debug_assert!` and is
//! otherwise ignored (reads report an empty cell, writes do nothing).

use arrayvec::ArrayVec;

use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the playfield
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices returned by [`Playfield::filled_lines`].
///
/// A single piece spans at most four rows, but a hand-built grid can have
/// every row filled, so the capacity covers the whole height.
pub type FilledLines = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
        }
    }

    /// Whether (x, y) lies on the grid
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the playfield
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the playfield
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether the cell at (x, y) is filled.
    ///
    /// (x, y) must be in bounds.
    pub fn is_cell_filled(&self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].filled,
            None => {
                debug_assert!(false, "is_cell_filled out of bounds: ({x}, {y})");
                false
            }
        }
    }

    /// Mark the cell at (x, y) filled with `color`.
    ///
    /// (x, y) must be in bounds.
    pub fn fill_cell(&mut self, x: i8, y: i8, color: Rgb) {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx] = Cell::filled(color),
            None => debug_assert!(false, "fill_cell out of bounds: ({x}, {y})"),
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.filled))
    }

    /// Check if a row has no filled cell
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| !cell.filled))
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Indices of every fully filled row, top to bottom (ascending)
    pub fn filled_lines(&self) -> FilledLines {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Clear each listed row and shift everything above it down by one.
    ///
    /// Rows are processed one at a time in the given order, each collapse
    /// completing before the next index is looked at. `lines` must therefore
    /// be strictly ascending: a lower row cleared first would move the rows
    /// above it and invalidate the remaining indices.
    pub fn clear_filled_lines_and_collapse(&mut self, lines: &[usize]) {
        debug_assert!(
            lines.windows(2).all(|w| w[0] < w[1]),
            "line indices must be strictly ascending: {lines:?}"
        );
        for &y in lines {
            self.clear_row_and_collapse(y);
        }
    }

    /// Clear a row and shift all rows above down.
    /// Uses copy_within for efficient memory movement
    fn clear_row_and_collapse(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            debug_assert!(false, "clear row out of bounds: {y}");
            return;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(Cell::EMPTY);
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            row.copy_from_slice(&self.cells[start..start + BOARD_WIDTH as usize]);
        }
    }

    /// Clear the entire playfield
    pub fn reset(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_index_calculation() {
        assert_eq!(Playfield::index(0, 0), Some(0));
        assert_eq!(Playfield::index(9, 0), Some(9));
        assert_eq!(Playfield::index(0, 1), Some(10));
        assert_eq!(Playfield::index(9, 19), Some(199));
        assert_eq!(Playfield::index(-1, 0), None);
        assert_eq!(Playfield::index(10, 0), None);
        assert_eq!(Playfield::index(0, 20), None);
    }

    #[test]
    fn test_fill_writes_flat_array() {
        let mut field = Playfield::new();
        field.fill_cell(5, 10, RED);
        assert_eq!(field.cells[10 * 10 + 5], Cell::filled(RED));
    }

    #[test]
    fn test_write_grid_matches_cells() {
        let mut field = Playfield::new();
        field.fill_cell(3, 5, RED);
        field.fill_cell(7, 19, RED);

        let mut grid = [[Cell::EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        field.write_grid(&mut grid);

        assert!(grid[5][3].filled);
        assert!(grid[19][7].filled);
        assert_eq!(grid.iter().flatten().filter(|c| c.filled).count(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_read_asserts() {
        Playfield::new().is_cell_filled(10, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly ascending")]
    fn test_descending_clear_asserts() {
        Playfield::new().clear_filled_lines_and_collapse(&[10, 5]);
    }
}
