//! rodio-backed [`AudioPlayer`].
//!
//! Each effect gets its own detached sink so overlapping plays mix freely.
//! Music runs on one long-lived sink whose volume can be changed at any time.

use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::bank::SoundBank;
use crate::core::SimpleRng;
use crate::synth::Arpeggio;
use crate::types::SoundId;
use crate::{resolve_pitch, AudioPlayer, PlayOptions};

pub struct RodioAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: SoundBank,
    music_sink: Option<Sink>,
    music_volume: f32,
    sfx_volume: f32,
    rng: SimpleRng,
}

impl RodioAudio {
    /// Open the default output device.
    pub fn new(bank: SoundBank, seed: u32) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no audio output device available")?;
        Ok(Self {
            _stream: stream,
            handle,
            bank,
            music_sink: None,
            music_volume: 0.5,
            sfx_volume: 1.0,
            rng: SimpleRng::new(seed),
        })
    }

    pub fn with_volumes(mut self, music: f32, sfx: f32) -> Self {
        self.music_volume = music.clamp(0.0, 1.0);
        self.sfx_volume = sfx.clamp(0.0, 1.0);
        self
    }

    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }
}

impl AudioPlayer for RodioAudio {
    fn play(&mut self, id: SoundId, options: PlayOptions) -> Result<()> {
        let clip = self
            .bank
            .clip(id)
            .ok_or_else(|| anyhow!("sound {} not loaded", id.as_str()))?;

        // An invalid variance still plays the clip, at base pitch.
        let (pitch, warning) = match resolve_pitch(&options, &mut self.rng) {
            Ok(pitch) => (pitch, None),
            Err(err) => (options.base_pitch, Some(err)),
        };

        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.sfx_volume * options.volume.max(0.0));
        let source = Decoder::new(Cursor::new(clip))
            .with_context(|| format!("decoding sound {}", id.as_str()))?;
        sink.append(source.speed(pitch));
        sink.detach();

        match warning {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn start_music(&mut self) -> Result<()> {
        if self.music_sink.is_some() {
            return Ok(());
        }
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.music_volume);
        match self.bank.music() {
            Some(bytes) => {
                let looped = Decoder::new_looped(Cursor::new(bytes)).context("decoding music")?;
                sink.append(looped);
            }
            None => sink.append(Arpeggio::new()),
        }
        self.music_sink = Some(sink);
        Ok(())
    }

    fn stop_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
    }

    fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.music_sink {
            sink.set_volume(self.music_volume);
        }
    }

    fn music_volume(&self) -> f32 {
        self.music_volume
    }
}
