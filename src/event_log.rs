//! JSON-lines event log.
//!
//! One object per line, e.g.
//! `{"ts_ms":1532,"type":"lines_cleared","count":2,"points":100}`.
//! `ts_ms` counts from when the log was created. A failed write disables the
//! log for the rest of the run.
//!
//! Warnings go through the same log and are also kept so the binary can print
//! them once the terminal has been restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameEvent;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    GameStarted,
    PieceLocked,
    LinesFlashing { count: u8 },
    LinesCleared { count: u8, points: u32 },
    LevelUp { level: u32 },
    Paused,
    Resumed,
    GameOver { score: u32, lines: u32, level: u32 },
    ReturnedToTitle,
    Warning { message: String },
}

impl From<&GameEvent> for LogRecord {
    fn from(event: &GameEvent) -> Self {
        match *event {
            GameEvent::GameStarted => LogRecord::GameStarted,
            GameEvent::PieceLocked => LogRecord::PieceLocked,
            GameEvent::LinesFlashing { count } => LogRecord::LinesFlashing { count },
            GameEvent::LinesCleared { count, points } => LogRecord::LinesCleared { count, points },
            GameEvent::LevelUp { level } => LogRecord::LevelUp { level },
            GameEvent::Paused => LogRecord::Paused,
            GameEvent::Resumed => LogRecord::Resumed,
            GameEvent::GameOver { score, lines, level } => {
                LogRecord::GameOver { score, lines, level }
            }
            GameEvent::ReturnedToTitle => LogRecord::ReturnedToTitle,
        }
    }
}

#[derive(Serialize)]
struct Line<'a> {
    ts_ms: u64,
    #[serde(flatten)]
    record: &'a LogRecord,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    started: Instant,
    buf: Vec<u8>,
    warnings: Vec<String>,
}

impl EventLog<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }

    /// A log that records warnings but writes nothing.
    pub fn disabled() -> Self {
        Self {
            out: None,
            started: Instant::now(),
            buf: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Some(out),
            started: Instant::now(),
            buf: Vec::with_capacity(256),
            warnings: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn event(&mut self, event: &GameEvent) {
        self.record(&LogRecord::from(event));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.record(&LogRecord::Warning {
            message: message.clone(),
        });
        if !self.warnings.contains(&message) {
            self.warnings.push(message);
        }
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let line = Line {
            ts_ms: self.started.elapsed().as_millis() as u64,
            record,
        };
        if serde_json::to_writer(&mut self.buf, &line).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    /// Warnings recorded so far, oldest first.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    /// Flush and hand back the writer (if the log is still enabled).
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.out.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn lines(bytes: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(bytes)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn events_are_tagged_json_lines() {
        let mut log = EventLog::with_writer(Vec::new());
        log.event(&GameEvent::LinesCleared { count: 2, points: 100 });
        log.event(&GameEvent::Paused);

        let out = log.into_inner().unwrap();
        let values = lines(&out);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["type"], "lines_cleared");
        assert_eq!(values[0]["count"], 2);
        assert_eq!(values[0]["points"], 100);
        assert!(values[0]["ts_ms"].is_u64());
        assert_eq!(values[1]["type"], "paused");
    }

    #[test]
    fn warnings_are_logged_and_kept() {
        let mut log = EventLog::with_writer(Vec::new());
        log.warn("sound line_clear not loaded");

        assert_eq!(log.take_warnings(), vec!["sound line_clear not loaded".to_string()]);
        assert!(log.take_warnings().is_empty());

        let values = lines(&log.into_inner().unwrap());
        assert_eq!(values[0]["type"], "warning");
        assert_eq!(values[0]["message"], "sound line_clear not loaded");
    }

    #[test]
    fn repeated_warnings_are_kept_once() {
        let mut log = EventLog::with_writer(Vec::new());
        for _ in 0..3 {
            log.warn("sound collision not loaded");
        }
        log.warn("sound level_up not loaded");

        assert_eq!(
            log.take_warnings(),
            vec![
                "sound collision not loaded".to_string(),
                "sound level_up not loaded".to_string()
            ]
        );

        let values = lines(&log.into_inner().unwrap());
        assert_eq!(values.len(), 4);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_disables_log() {
        let mut log = EventLog::with_writer(Broken);
        log.event(&GameEvent::GameStarted);
        assert!(!log.is_enabled());

        log.warn("still collected");
        assert_eq!(log.take_warnings().len(), 1);
    }

    #[test]
    fn disabled_log_keeps_warnings() {
        let mut log = EventLog::disabled();
        log.event(&GameEvent::GameStarted);
        log.warn("no audio device");
        assert!(!log.is_enabled());
        assert_eq!(log.take_warnings(), vec!["no audio device".to_string()]);
    }
}
