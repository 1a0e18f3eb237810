use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/audiophile/config.toml` or
/// `~/.config/audiophile/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `AUDIOPHILE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            playback: PlaybackSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder scanned at startup when no directory argument is given.
    pub directory: String,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            directory: "MusicLibrary".to_string(),
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Elapsed-time cutoff for the previous button (milliseconds). At or
    /// under the cutoff, previous skips to the prior track; over it,
    /// previous restarts the current track from zero.
    pub restart_threshold_ms: u64,
    /// Delay between detecting that a track has finished and advancing to
    /// the next one (milliseconds). Absorbs the brief silent window while
    /// the output drains, so the advance does not mis-fire.
    pub track_end_grace_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            restart_threshold_ms: 2000,
            track_end_grace_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Welcome to Audiophile... ".to_string(),
        }
    }
}
