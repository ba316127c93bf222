//! Game module - screen state machine and per-tick gameplay rules
//!
//! [`Game::update`] is called once per fixed simulation step with the sampled
//! [`InputState`]. While a game is running (and not paused) a step:
//!
//! 1. applies held direction keys with auto-repeat,
//! 2. applies a latched rotation request,
//! 3. advances gravity (suspended while Down is held),
//! 4. locks the piece when a downward move was blocked, promotes the next
//!    piece and starts the line flash for any filled rows.
//!
//! While rows flash, movement and gravity wait; the rows are cleared and
//! scored when the flash ends.

use std::time::Duration;

use crate::events::GameEvent;
use crate::input::{InputState, Key};
use crate::piece::Tetromino;
use crate::playfield::{FilledLines, Playfield};
use crate::rng::TetrominoGenerator;
use crate::rules::Rules;
use crate::scoring::Progress;
use crate::snapshot::{FlashSnapshot, GameSnapshot, PieceSnapshot};
use crate::types::BOARD_HEIGHT;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    TitleScreen,
    InGame,
    GameOver,
}

#[derive(Debug, Clone)]
struct LineFlash {
    rows: FilledLines,
    elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    screen: Screen,
    paused: bool,
    quit: bool,

    playfield: Playfield,
    generator: TetrominoGenerator,
    current: Option<Tetromino>,
    next: Option<Tetromino>,
    progress: Progress,

    fall_timer: Duration,
    move_timer: Duration,
    /// Set once the first auto-repeat of the current hold has fired.
    repeating: bool,
    rotate_requested: bool,
    flash: Option<LineFlash>,

    events: Vec<GameEvent>,
}

/// Enough for the most events one step can queue.
const EVENT_QUEUE_CAPACITY: usize = 8;

impl Game {
    /// Create a game on the title screen.
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        Self {
            rules,
            screen: Screen::TitleScreen,
            paused: false,
            quit: false,
            playfield: Playfield::new(),
            generator: TetrominoGenerator::new(seed),
            current: None,
            next: None,
            progress: Progress::new(&rules),
            fall_timer: Duration::ZERO,
            move_timer: Duration::ZERO,
            repeating: false,
            rotate_requested: false,
            flash: None,
            events: Vec::with_capacity(EVENT_QUEUE_CAPACITY),
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines()
    }

    pub fn fall_delay(&self) -> Duration {
        self.progress.fall_delay()
    }

    pub fn current(&self) -> Option<&Tetromino> {
        self.current.as_ref()
    }

    pub fn next(&self) -> Option<&Tetromino> {
        self.next.as_ref()
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Mutable grid access for setting up scripted scenarios.
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    /// Rows waiting to be cleared, if a flash is running.
    pub fn flashing_rows(&self) -> Option<&[usize]> {
        self.flash.as_ref().map(|flash| flash.rows.as_slice())
    }

    /// Take every event queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Advance one fixed step.
    pub fn update(&mut self, input: &InputState) {
        if input.is_down(Key::Quit) {
            self.quit = true;
            return;
        }

        match self.screen {
            Screen::TitleScreen => {
                if input.just_released(Key::Confirm) {
                    self.start();
                }
            }
            Screen::InGame => {
                if input.just_released(Key::Pause) {
                    self.toggle_pause();
                }
                if !self.paused {
                    self.tick(input);
                }
            }
            Screen::GameOver => {
                if input.just_released(Key::Confirm) {
                    self.screen = Screen::TitleScreen;
                    self.events.push(GameEvent::ReturnedToTitle);
                }
            }
        }
    }

    /// Reset progress, grid and generator and spawn the first two pieces.
    pub fn start(&mut self) {
        self.playfield.reset();
        self.generator.reset();
        self.progress = Progress::new(&self.rules);
        self.current = Some(Tetromino::new(self.generator.next()));
        self.next = Some(Tetromino::new(self.generator.next()));
        self.fall_timer = Duration::ZERO;
        self.move_timer = Duration::ZERO;
        self.repeating = false;
        self.rotate_requested = false;
        self.flash = None;
        self.paused = false;
        self.screen = Screen::InGame;
        self.events.push(GameEvent::GameStarted);
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.rotate_requested = false;
        self.events.push(if self.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
    }

    fn tick(&mut self, input: &InputState) {
        if input.just_pressed(Key::Rotate) {
            self.rotate_requested = true;
        }

        if self.flash.is_some() {
            self.rotate_requested = false;
            self.advance_flash();
            return;
        }

        let mut collided = self.apply_movement(input);

        if !collided && std::mem::take(&mut self.rotate_requested) {
            if let Some(piece) = self.current.as_mut() {
                piece.try_rotate_cw(&self.playfield);
            }
        }

        if !collided {
            collided = self.apply_gravity(input);
        }

        if collided {
            self.lock_current();
        }
    }

    /// Held direction keys with auto-repeat. Returns true when a downward
    /// move was blocked.
    fn apply_movement(&mut self, input: &InputState) -> bool {
        let left = input.is_down(Key::Left);
        let right = input.is_down(Key::Right);
        let down = input.is_down(Key::Down);

        if !(left || right || down) {
            self.move_timer = Duration::ZERO;
            self.repeating = false;
            return false;
        }

        let newly_held = input.just_pressed(Key::Left)
            || input.just_pressed(Key::Right)
            || input.just_pressed(Key::Down);

        if newly_held {
            self.move_timer = Duration::ZERO;
            return self.move_piece(left, right, down);
        }

        self.move_timer += self.rules.step;
        let delay = if self.repeating || (down && !left && !right) {
            self.rules.move_repeat_delay
        } else {
            self.rules.move_initial_delay
        };
        if self.move_timer < delay {
            return false;
        }
        self.move_timer -= delay;
        self.repeating = true;
        self.move_piece(left, right, down)
    }

    fn move_piece(&mut self, left: bool, right: bool, down: bool) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        let dx = right as i8 - left as i8;
        if dx != 0 {
            piece.try_move(dx, 0, &self.playfield);
        }
        down && !piece.try_move(0, 1, &self.playfield)
    }

    /// Returns true when the automatic drop was blocked.
    fn apply_gravity(&mut self, input: &InputState) -> bool {
        if input.is_down(Key::Down) {
            self.fall_timer = Duration::ZERO;
            return false;
        }

        self.fall_timer += self.rules.step;
        if self.fall_timer < self.progress.fall_delay() {
            return false;
        }
        self.fall_timer = Duration::ZERO;

        match self.current.as_mut() {
            Some(piece) => !piece.try_move(0, 1, &self.playfield),
            None => false,
        }
    }

    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        piece.lock_into(&mut self.playfield);
        self.events.push(GameEvent::PieceLocked);
        self.fall_timer = Duration::ZERO;

        if !self.playfield.is_row_empty(0) {
            self.screen = Screen::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.progress.score(),
                lines: self.progress.lines(),
                level: self.progress.level(),
            });
            return;
        }

        self.current = self.next.take();
        self.next = Some(Tetromino::new(self.generator.next()));

        let rows = self.playfield.filled_lines();
        if !rows.is_empty() {
            self.events.push(GameEvent::LinesFlashing {
                count: rows.len() as u8,
            });
            self.flash = Some(LineFlash {
                rows,
                elapsed: Duration::ZERO,
            });
        }
    }

    fn advance_flash(&mut self) {
        let done = match self.flash.as_mut() {
            Some(flash) => {
                flash.elapsed += self.rules.step;
                flash.elapsed >= self.rules.line_flash_duration
            }
            None => false,
        };
        if done {
            if let Some(flash) = self.flash.take() {
                self.commit_clear(&flash.rows);
            }
        }
    }

    fn commit_clear(&mut self, rows: &[usize]) {
        self.playfield.clear_filled_lines_and_collapse(rows);
        let outcome = self.progress.record_clear(&self.rules, rows.len());
        self.events.push(GameEvent::LinesCleared {
            count: rows.len() as u8,
            points: outcome.points,
        });
        if let Some(level) = outcome.level_up {
            self.events.push(GameEvent::LevelUp { level });
        }
    }

    /// Whether flashing rows are drawn highlighted in the current interval.
    pub fn flash_lit(&self) -> bool {
        match &self.flash {
            Some(flash) => {
                let interval = self.rules.flash_interval();
                if interval.is_zero() {
                    return true;
                }
                (flash.elapsed.as_nanos() / interval.as_nanos()) % 2 == 0
            }
            None => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.playfield.write_grid(&mut out.board);

        out.screen = self.screen;
        out.paused = self.paused;
        out.current = self.current.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.flash = self.flash.as_ref().map(|flash| {
            let mut rows = [false; BOARD_HEIGHT as usize];
            for &y in &flash.rows {
                rows[y] = true;
            }
            FlashSnapshot {
                rows,
                lit: self.flash_lit(),
            }
        });
        out.score = self.progress.score();
        out.level = self.progress.level();
        out.lines = self.progress.lines();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
