//! Audio module - sound effects and background music.
//!
//! The game only speaks in logical [`SoundId`]s. An [`AudioPlayer`] turns them
//! into sound: [`RodioAudio`] plays decoded clips on the default output device,
//! [`SilentAudio`] is used when there is no device (or audio is muted).
//!
//! Clips are loaded once into a [`SoundBank`]; a missing clip is reported by
//! the bank and later plays of that id return an error instead of panicking.

pub mod bank;
pub mod player;
pub mod synth;

pub use neon_tetris_core as core;
pub use neon_tetris_types as types;

pub use bank::SoundBank;
pub use player::RodioAudio;
pub use synth::Arpeggio;

use anyhow::Result;

use crate::core::SimpleRng;
use crate::types::SoundId;

/// Per-play adjustments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayOptions {
    /// Random pitch offset as a fraction of `base_pitch`, in `[0, 1]`
    /// (0.15 = ±15%).
    pub pitch_variance: f32,
    pub base_pitch: f32,
    /// Multiplier on the player's effect volume.
    pub volume: f32,
}

impl PlayOptions {
    pub fn with_pitch_variance(mut self, variance: f32) -> Self {
        self.pitch_variance = variance;
        self
    }

    pub fn with_base_pitch(mut self, pitch: f32) -> Self {
        self.base_pitch = pitch;
        self
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            pitch_variance: 0.0,
            base_pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Playback speed for one play of a clip.
///
/// A variance outside `[0, 1]` is an error; callers fall back to no variance.
pub fn resolve_pitch(options: &PlayOptions, rng: &mut SimpleRng) -> Result<f32> {
    if !(0.0..=1.0).contains(&options.pitch_variance) {
        anyhow::bail!(
            "pitch variance {} outside [0, 1], playing at base pitch",
            options.pitch_variance
        );
    }
    if options.pitch_variance == 0.0 {
        return Ok(options.base_pitch);
    }
    let offset = options.pitch_variance * rng.next_signed_unit();
    // Speed must stay positive for the resampler.
    Ok((options.base_pitch * (1.0 + offset)).max(0.05))
}

pub trait AudioPlayer {
    /// Play a one-shot effect.
    fn play(&mut self, id: SoundId, options: PlayOptions) -> Result<()>;

    /// Start the looping music track (no-op if already playing).
    fn start_music(&mut self) -> Result<()>;

    fn stop_music(&mut self);

    /// Music volume in `[0, 1]`.
    fn set_music_volume(&mut self, volume: f32);

    fn music_volume(&self) -> f32;
}

impl<P: AudioPlayer + ?Sized> AudioPlayer for Box<P> {
    fn play(&mut self, id: SoundId, options: PlayOptions) -> Result<()> {
        (**self).play(id, options)
    }

    fn start_music(&mut self) -> Result<()> {
        (**self).start_music()
    }

    fn stop_music(&mut self) {
        (**self).stop_music()
    }

    fn set_music_volume(&mut self, volume: f32) {
        (**self).set_music_volume(volume)
    }

    fn music_volume(&self) -> f32 {
        (**self).music_volume()
    }
}

/// Player that accepts every request and makes no sound.
#[derive(Debug, Clone, Default)]
pub struct SilentAudio {
    music_volume: f32,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioPlayer for SilentAudio {
    fn play(&mut self, _id: SoundId, _options: PlayOptions) -> Result<()> {
        Ok(())
    }

    fn start_music(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop_music(&mut self) {}

    fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
    }

    fn music_volume(&self) -> f32 {
        self.music_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_variance_keeps_base_pitch() {
        let mut rng = SimpleRng::new(1);
        let options = PlayOptions::default().with_base_pitch(1.25);
        assert_eq!(resolve_pitch(&options, &mut rng).unwrap(), 1.25);
    }

    #[test]
    fn variance_stays_within_band() {
        let mut rng = SimpleRng::new(9);
        let options = PlayOptions::default().with_pitch_variance(0.15);
        for _ in 0..500 {
            let pitch = resolve_pitch(&options, &mut rng).unwrap();
            assert!((0.849..=1.151).contains(&pitch), "{pitch}");
        }
    }

    #[test]
    fn out_of_range_variance_is_rejected() {
        let mut rng = SimpleRng::new(9);
        let options = PlayOptions::default().with_pitch_variance(1.5);
        assert!(resolve_pitch(&options, &mut rng).is_err());
    }

    #[test]
    fn silent_player_clamps_volume() {
        let mut audio = SilentAudio::new();
        audio.set_music_volume(3.0);
        assert_eq!(audio.music_volume(), 1.0);
        assert!(audio.play(SoundId::LineClear, PlayOptions::default()).is_ok());
    }

    #[test]
    fn boxed_player_forwards() {
        let mut audio: Box<dyn AudioPlayer> = Box::new(SilentAudio::new());
        audio.set_music_volume(0.4);
        assert_eq!(audio.music_volume(), 0.4);
    }
}
