use std::path::PathBuf;
use std::time::Duration;

/// Output sample rate assumed when a file carries no rate in its properties.
pub const FALLBACK_SAMPLE_RATE: u32 = 44_100;

/// One playable file discovered at startup. Immutable once enumerated.
#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    /// File name without directory and extension.
    pub name: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
    /// Sample rate the output must be initialized with before this file
    /// is handed to the backend.
    pub sample_rate: u32,
}

impl Track {
    /// Text shown in the "Playing:" status line. Prefers tagged
    /// "Artist - Title", falls back to the file name.
    pub fn display(&self) -> String {
        match (self.artist.as_deref(), self.title.as_deref()) {
            (Some(artist), Some(title)) => format!("{} - {}", artist, title),
            (None, Some(title)) => title.to_string(),
            _ => self.name.clone(),
        }
    }
}
