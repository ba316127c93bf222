//! Sound bank: clip bytes loaded from the assets directory.
//!
//! Layout under the assets root:
//!
//! ```text
//! sounds/game_start.wav   sounds/collision.wav   sounds/line_clear.wav
//! sounds/level_up.wav     sounds/pause.wav       sounds/game_over.wav
//! music/theme.ogg
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::types::SoundId;

pub const MUSIC_FILE: &str = "music/theme.ogg";

/// Path of the clip for `id` under `assets`.
pub fn sound_path(assets: &Path, id: SoundId) -> PathBuf {
    assets.join("sounds").join(format!("{}.wav", id.as_str()))
}

#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    clips: HashMap<SoundId, Arc<[u8]>>,
    music: Option<Arc<[u8]>>,
    missing: Vec<PathBuf>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every clip and the music track. Unreadable files are recorded in
    /// [`missing`](Self::missing) rather than failing the load.
    pub fn load(assets: &Path) -> Self {
        let mut bank = Self::new();
        for id in SoundId::ALL {
            let path = sound_path(assets, id);
            match std::fs::read(&path) {
                Ok(bytes) => bank.insert(id, bytes),
                Err(_) => bank.missing.push(path),
            }
        }

        let music = assets.join(MUSIC_FILE);
        match std::fs::read(&music) {
            Ok(bytes) => bank.music = Some(bytes.into()),
            Err(_) => bank.missing.push(music),
        }
        bank
    }

    pub fn insert(&mut self, id: SoundId, bytes: impl Into<Arc<[u8]>>) {
        self.clips.insert(id, bytes.into());
    }

    pub fn clip(&self, id: SoundId) -> Option<Arc<[u8]>> {
        self.clips.get(&id).cloned()
    }

    pub fn music(&self) -> Option<Arc<[u8]>> {
        self.music.clone()
    }

    pub fn missing(&self) -> &[PathBuf] {
        &self.missing
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
