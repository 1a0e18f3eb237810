use std::time::Instant;

/// Playback flags for the currently selected track.
///
/// Invariant: `has_started == false` implies `is_playing == false` and
/// `started_at == None`.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    /// Index of the selected track in the library.
    pub current_index: usize,
    /// Whether output is currently audible.
    pub is_playing: bool,
    /// Whether the selected track has been handed to the backend at least
    /// once since it was loaded.
    pub has_started: bool,
    /// When the selected track most recently started from zero. Drives the
    /// restart-vs-previous heuristic.
    pub started_at: Option<Instant>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            has_started: false,
            started_at: None,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.is_playing {
            PlaybackStatus::Playing
        } else if self.has_started {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Stopped
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse three-state view of `PlaybackState`, as shown to the UI and MPRIS.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self::Stopped
    }
}
