//! Game events - side-effect notifications queued by the simulation
//!
//! The core never plays sounds or writes logs itself; it records what happened
//! and the application drains the queue after each frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    GameStarted,
    PieceLocked,
    LinesFlashing { count: u8 },
    LinesCleared { count: u8, points: u32 },
    LevelUp { level: u32 },
    Paused,
    Resumed,
    GameOver { score: u32, lines: u32, level: u32 },
    ReturnedToTitle,
}
