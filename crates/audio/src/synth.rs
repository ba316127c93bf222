//! Procedural background loop, used when no music file is available.

use std::time::Duration;

/// Minor-key arpeggio: one note per eighth second, square-ish lead over a
/// sine bass, with a short attack/release envelope so notes do not click.
#[derive(Debug, Clone)]
pub struct Arpeggio {
    sample_rate: u32,
    channels: u16,
    frame: u64,
    chan: u16,
}

const LEAD_HZ: [f32; 16] = [
    329.63, 392.00, 493.88, 392.00, 329.63, 392.00, 493.88, 587.33, //
    293.66, 349.23, 440.00, 349.23, 261.63, 329.63, 392.00, 329.63,
];
const BASS_HZ: [f32; 2] = [82.41, 73.42];

impl Arpeggio {
    pub fn new() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
            frame: 0,
            chan: 0,
        }
    }

    fn note_len_frames(&self) -> u64 {
        (self.sample_rate as u64) / 8
    }

    fn sample_at(&self, frame: u64) -> f32 {
        let note_len = self.note_len_frames();
        let note = ((frame / note_len) % LEAD_HZ.len() as u64) as usize;
        let bar = ((frame / (note_len * 8)) % BASS_HZ.len() as u64) as usize;

        let pos = frame % note_len;
        let t = pos as f32 / self.sample_rate as f32;
        let bar_t = frame as f32 / self.sample_rate as f32;

        let attack = (self.sample_rate / 200) as u64;
        let release = (self.sample_rate / 50) as u64;
        let env = if pos < attack {
            pos as f32 / attack.max(1) as f32
        } else if pos >= note_len.saturating_sub(release) {
            note_len.saturating_sub(pos) as f32 / release.max(1) as f32
        } else {
            1.0
        };

        let tau = 2.0 * std::f32::consts::PI;
        let phase = tau * LEAD_HZ[note] * t;
        // First three odd harmonics of a square wave.
        let lead = phase.sin() + (phase * 3.0).sin() / 3.0 + (phase * 5.0).sin() / 5.0;
        let bass = (tau * BASS_HZ[bar] * bar_t).sin();

        (lead * 0.12 * env) + (bass * 0.10)
    }
}

impl Default for Arpeggio {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Arpeggio {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.sample_at(self.frame);

        // Advance in interleaved (stereo) sample space.
        self.chan += 1;
        if self.chan >= self.channels {
            self.chan = 0;
            self.frame = self.frame.wrapping_add(1);
        }
        Some(sample)
    }
}

impl rodio::Source for Arpeggio {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}
