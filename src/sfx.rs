//! Sound-effect director: turns drained game events into audio calls.

use anyhow::Result;

use crate::audio::{AudioPlayer, PlayOptions};
use crate::core::GameEvent;
use crate::types::SoundId;

/// Random pitch spread on piece locks.
pub const COLLISION_PITCH_VARIANCE: f32 = 0.15;
/// Extra pitch per cleared line beyond the first.
pub const LINE_CLEAR_PITCH_STEP: f32 = 0.08;
/// Music volume multiplier while paused.
pub const PAUSE_DUCK: f32 = 0.3;

pub struct SoundDirector<A: AudioPlayer> {
    audio: A,
    music_volume: f32,
    ducked: bool,
}

impl<A: AudioPlayer> SoundDirector<A> {
    pub fn new(mut audio: A, music_volume: f32) -> Self {
        let music_volume = music_volume.clamp(0.0, 1.0);
        audio.set_music_volume(music_volume);
        Self {
            audio,
            music_volume,
            ducked: false,
        }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// React to one event. Errors are warnings: the game keeps going.
    pub fn handle(&mut self, event: &GameEvent) -> Result<()> {
        match *event {
            GameEvent::GameStarted => {
                self.restore_music();
                // A missing jingle must not keep the music from starting.
                let jingle = self.audio.play(SoundId::GameStart, PlayOptions::default());
                let music = self.audio.start_music();
                jingle.and(music)
            }
            GameEvent::PieceLocked => self.audio.play(
                SoundId::Collision,
                PlayOptions::default().with_pitch_variance(COLLISION_PITCH_VARIANCE),
            ),
            GameEvent::LinesFlashing { count } => {
                let steps = count.saturating_sub(1) as f32;
                self.audio.play(
                    SoundId::LineClear,
                    PlayOptions::default().with_base_pitch(1.0 + steps * LINE_CLEAR_PITCH_STEP),
                )
            }
            GameEvent::LevelUp { .. } => self.audio.play(SoundId::LevelUp, PlayOptions::default()),
            GameEvent::Paused => {
                self.ducked = true;
                self.audio.set_music_volume(self.music_volume * PAUSE_DUCK);
                self.audio.play(SoundId::Pause, PlayOptions::default())
            }
            GameEvent::Resumed => {
                self.restore_music();
                self.audio.play(SoundId::Pause, PlayOptions::default())
            }
            GameEvent::GameOver { .. } => {
                self.audio.stop_music();
                self.restore_music();
                self.audio.play(SoundId::GameOver, PlayOptions::default())
            }
            GameEvent::LinesCleared { .. } | GameEvent::ReturnedToTitle => Ok(()),
        }
    }

    fn restore_music(&mut self) {
        if std::mem::take(&mut self.ducked) {
            self.audio.set_music_volume(self.music_volume);
        }
    }
}
