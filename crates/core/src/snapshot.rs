use crate::catalog::Shape;
use crate::game::Screen;
use crate::piece::Tetromino;
use crate::types::{Cell, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl PieceSnapshot {
    /// Absolute coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.iter().enumerate().flat_map(move |(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &set)| set)
                .map(move |(dx, _)| (self.x + dx as i8, self.y + dy as i8))
        })
    }
}

impl From<Tetromino> for PieceSnapshot {
    fn from(value: Tetromino) -> Self {
        let position = value.position();
        Self {
            kind: value.kind(),
            shape: *value.shape(),
            x: position.x,
            y: position.y,
            color: value.color(),
        }
    }
}

/// Rows currently flashing before a clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashSnapshot {
    pub rows: [bool; BOARD_HEIGHT as usize],
    /// Whether the current interval shows the rows highlighted.
    pub lit: bool,
}

impl FlashSnapshot {
    pub fn contains(&self, y: usize) -> bool {
        self.rows.get(y).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub screen: Screen,
    pub paused: bool,
    pub board: Grid,
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub flash: Option<FlashSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            screen: Screen::TitleScreen,
            paused: false,
            board: [[Cell::EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            flash: None,
            score: 0,
            level: 0,
            lines: 0,
        }
    }
}
