//! Input module - per-tick keyboard state with edge detection
//!
//! The application samples a [`KeyboardSource`] once per simulation tick into
//! an [`InputState`]; the game only ever sees that snapshot. Edges
//! (`just_pressed` / `just_released`) compare the current sample against the
//! previous one, so every edge is observed by exactly one tick.

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Rotate,
    Pause,
    Confirm,
    Quit,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Left,
        Key::Right,
        Key::Down,
        Key::Rotate,
        Key::Pause,
        Key::Confirm,
        Key::Quit,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Anything that can answer "is this key held right now".
pub trait KeyboardSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Held keys for the current and previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    current: u8,
    previous: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample `source`, shifting the current sample into the previous one.
    pub fn update(&mut self, source: &impl KeyboardSource) {
        let mut held = 0;
        for key in Key::ALL {
            if source.is_key_down(key) {
                held |= key.bit();
            }
        }
        self.push(held);
    }

    /// Record an explicit set of held keys.
    pub fn update_with(&mut self, held: &[Key]) {
        let bits = held.iter().fold(0, |acc, key| acc | key.bit());
        self.push(bits);
    }

    fn push(&mut self, held: u8) {
        self.previous = self.current;
        self.current = held;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.current & key.bit() != 0
    }

    pub fn was_down(&self, key: Key) -> bool {
        self.previous & key.bit() != 0
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.is_down(key) && !self.was_down(key)
    }

    pub fn just_released(&self, key: Key) -> bool {
        !self.is_down(key) && self.was_down(key)
    }

    /// Forget both samples (e.g. after the terminal lost focus).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
