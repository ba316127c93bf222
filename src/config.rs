//! Application configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `NEON_TETRIS_SEED` | clock-derived | Piece generator seed (u32) |
//! | `NEON_TETRIS_ASSETS_DIR` | `assets` | Root of `sounds/` and `music/` |
//! | `NEON_TETRIS_MUTE` | off | `1`/`true`/`yes` disables audio |
//! | `NEON_TETRIS_MUSIC_VOLUME` | 0.5 | Music volume, clamped to `[0, 1]` |
//! | `NEON_TETRIS_SFX_VOLUME` | 1.0 | Effect volume, clamped to `[0, 1]` |
//! | `NEON_TETRIS_LOG_PATH` | none | JSON-lines event log file |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;
pub const DEFAULT_SFX_VOLUME: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u32,
    pub assets_dir: PathBuf,
    pub mute: bool,
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            mute: false,
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = get("NEON_TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let assets_dir = get("NEON_TETRIS_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        let mute = get("NEON_TETRIS_MUTE")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        let volume = |name: &str, default: f32| {
            get(name)
                .and_then(|s| s.parse::<f32>().ok())
                .filter(|v| v.is_finite())
                .map(|v| v.clamp(0.0, 1.0))
                .unwrap_or(default)
        };

        Self {
            seed,
            assets_dir,
            mute,
            music_volume: volume("NEON_TETRIS_MUSIC_VOLUME", DEFAULT_MUSIC_VOLUME),
            sfx_volume: volume("NEON_TETRIS_SFX_VOLUME", DEFAULT_SFX_VOLUME),
            log_path: get("NEON_TETRIS_LOG_PATH").map(PathBuf::from),
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}
