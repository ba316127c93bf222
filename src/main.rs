//! Neon Tetris runner (default binary).
//!
//! Fixed-timestep loop: terminal events are pumped into a held-key table once
//! per frame, the simulation runs zero or more 1/60 s steps against it, and the
//! resulting snapshot is drawn once.
//!
//! Configuration comes from `NEON_TETRIS_*` environment variables (see
//! [`neon_tetris::config`]).

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use neon_tetris::audio::{AudioPlayer, RodioAudio, SilentAudio, SoundBank};
use neon_tetris::config::AppConfig;
use neon_tetris::core::{FixedTimestep, Game, GameSnapshot, InputState};
use neon_tetris::event_log::EventLog;
use neon_tetris::input::{disable_release_events, enable_release_events, TerminalKeyboard};
use neon_tetris::sfx::SoundDirector;
use neon_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Upper bound on how long a frame sleeps waiting for the next step.
const IDLE_SLEEP: Duration = Duration::from_millis(4);

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let mut log = match &config.log_path {
        Some(path) => EventLog::open(path).unwrap_or_else(|err| {
            let mut log = EventLog::disabled();
            log.warn(format!("{err:#}"));
            log
        }),
        None => EventLog::disabled(),
    };

    let audio = open_audio(&config, &mut log);
    let mut director = SoundDirector::new(audio, config.music_volume);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let release_events = enable_release_events(term.writer_mut()).unwrap_or(false);

    let result = run(&mut term, &config, release_events, &mut director, &mut log);

    // Always try to restore terminal state.
    if release_events {
        let out = term.writer_mut();
        let _ = disable_release_events(out).and_then(|_| out.flush());
    }
    let _ = term.exit();
    director.audio_mut().stop_music();
    log.flush();

    for warning in log.take_warnings() {
        eprintln!("warning: {warning}");
    }
    result
}

fn open_audio(config: &AppConfig, log: &mut EventLog) -> Box<dyn AudioPlayer> {
    if config.mute {
        return Box::new(SilentAudio::new());
    }

    let bank = SoundBank::load(&config.assets_dir);
    for path in bank.missing() {
        log.warn(format!("audio asset missing: {}", path.display()));
    }

    match RodioAudio::new(bank, config.seed) {
        Ok(audio) => Box::new(audio.with_volumes(config.music_volume, config.sfx_volume)),
        Err(err) => {
            log.warn(format!("{err:#}; continuing without sound"));
            Box::new(SilentAudio::new())
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: &AppConfig,
    release_events: bool,
    director: &mut SoundDirector<Box<dyn AudioPlayer>>,
    log: &mut EventLog,
) -> Result<()> {
    let mut game = Game::new(config.seed);
    let mut input = InputState::new();
    let mut keyboard = TerminalKeyboard::new().with_release_events(release_events);
    let mut timestep = FixedTimestep::default();

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let mut last_frame = Instant::now();

    loop {
        keyboard.pump()?;

        let now = Instant::now();
        let steps = timestep.advance(now - last_frame);
        last_frame = now;

        for _ in 0..steps {
            input.update(&keyboard);
            keyboard.sampled();
            game.update(&input);

            for event in game.drain_events() {
                log.event(&event);
                if let Err(err) = director.handle(&event) {
                    log.warn(format!("{err:#}"));
                }
            }

            if game.should_quit() {
                return Ok(());
            }
        }

        if steps > 0 {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snapshot);
            view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let until_next = timestep
            .step()
            .saturating_sub(Instant::now().saturating_duration_since(last_frame));
        std::thread::sleep(until_next.min(IDLE_SLEEP));
    }
}
