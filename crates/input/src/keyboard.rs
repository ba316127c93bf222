//! Held-key table fed by terminal events.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{queue, terminal};

use crate::core::{Key, KeyboardSource};
use crate::map::map_key_event;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers auto-repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

const KEY_COUNT: usize = Key::ALL.len();

/// Ask the terminal to report key releases. Returns whether it will.
pub fn enable_release_events<W: Write>(out: &mut W) -> io::Result<bool> {
    if !terminal::supports_keyboard_enhancement()? {
        return Ok(false);
    }
    queue!(
        out,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )?;
    out.flush()?;
    Ok(true)
}

pub fn disable_release_events<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, PopKeyboardEnhancementFlags)?;
    out.flush()
}

#[derive(Debug, Clone)]
pub struct TerminalKeyboard {
    /// When each key was last reported down; `None` when released.
    held: [Option<Instant>; KEY_COUNT],
    /// Pressed since the game last sampled the table.
    fresh: [bool; KEY_COUNT],
    /// Released before the press was sampled; applied by [`sampled`](Self::sampled).
    deferred_release: [bool; KEY_COUNT],
    release_events: bool,
    key_release_timeout: Duration,
}

impl TerminalKeyboard {
    pub fn new() -> Self {
        Self {
            held: [None; KEY_COUNT],
            fresh: [false; KEY_COUNT],
            deferred_release: [false; KEY_COUNT],
            release_events: false,
            key_release_timeout: DEFAULT_KEY_RELEASE_TIMEOUT,
        }
    }

    /// Trust release events instead of the timeout.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.key_release_timeout = timeout;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Read every pending terminal event without blocking.
    pub fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(&ev, Instant::now());
        }
        self.release_stale(Instant::now());
        Ok(())
    }

    pub fn handle_event(&mut self, ev: &Event, now: Instant) {
        match ev {
            Event::Key(key) => {
                let Some(mapped) = map_key_event(*key) else {
                    return;
                };
                let i = mapped as usize;
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if self.held[i].is_none() {
                            self.fresh[i] = true;
                        }
                        self.held[i] = Some(now);
                        self.deferred_release[i] = false;
                    }
                    // A tap shorter than a frame still has to be seen held once.
                    KeyEventKind::Release if self.fresh[i] => self.deferred_release[i] = true,
                    KeyEventKind::Release => self.held[i] = None,
                }
            }
            Event::FocusLost => self.release_all(),
            _ => {}
        }
    }

    /// Release keys not re-reported within the timeout (no-op when the
    /// terminal reports releases itself).
    pub fn release_stale(&mut self, now: Instant) {
        if self.release_events {
            return;
        }
        for slot in &mut self.held {
            if let Some(since) = *slot {
                if now.saturating_duration_since(since) > self.key_release_timeout {
                    *slot = None;
                }
            }
        }
    }

    /// Mark the current table as observed by the game.
    pub fn sampled(&mut self) {
        for i in 0..KEY_COUNT {
            self.fresh[i] = false;
            if std::mem::take(&mut self.deferred_release[i]) {
                self.held[i] = None;
            }
        }
    }

    pub fn release_all(&mut self) {
        self.held = [None; KEY_COUNT];
        self.fresh = [false; KEY_COUNT];
        self.deferred_release = [false; KEY_COUNT];
    }
}

impl KeyboardSource for TerminalKeyboard {
    fn is_key_down(&self, key: Key) -> bool {
        self.held[key as usize].is_some()
    }
}

impl Default for TerminalKeyboard {
    fn default() -> Self {
        Self::new()
    }
}
