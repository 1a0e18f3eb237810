use std::time::{Duration, Instant};

use crate::library::Track;

use super::backend::AudioBackend;
use super::state::PlaybackState;

/// Maps the four transport actions onto backend calls.
///
/// Owns the library and the playback flags; every mutation happens inside
/// one of the `on_*` handlers, synchronously on the caller's thread.
pub struct Controller {
    pub tracks: Vec<Track>,
    pub state: PlaybackState,
    restart_threshold: Duration,
}

impl Controller {
    /// Create a controller over a non-empty library, positioned on the
    /// first track, stopped.
    pub fn new(tracks: Vec<Track>, restart_threshold: Duration) -> Self {
        assert!(!tracks.is_empty(), "controller requires a non-empty library");
        Self {
            tracks,
            state: PlaybackState::new(),
            restart_threshold,
        }
    }

    /// The currently selected track.
    pub fn current(&self) -> &Track {
        &self.tracks[self.state.current_index]
    }

    /// Prime the backend with the selected track without starting playback.
    /// Called once at startup.
    pub fn load_current<B: AudioBackend>(&mut self, backend: &mut B) {
        let index = self.state.current_index;
        self.load_track(backend, index, false);
    }

    /// Toggle between playing and paused. Starts the track from zero when it
    /// has never been handed to the backend.
    pub fn on_play_pause<B: AudioBackend>(&mut self, backend: &mut B) {
        if self.state.is_playing {
            backend.pause();
            self.state.is_playing = false;
        } else if self.state.has_started {
            backend.unpause();
            self.state.is_playing = true;
        } else {
            backend.play();
            self.state.is_playing = true;
            self.state.has_started = true;
            self.state.started_at = Some(Instant::now());
        }
    }

    /// Previous button: skip back one track when the current one has not
    /// started, or started no longer than the restart threshold ago.
    /// Otherwise rewind the current track to zero, paused, so the next play
    /// action starts it fresh.
    pub fn on_previous<B: AudioBackend>(&mut self, backend: &mut B) {
        if self.state.has_started {
            let elapsed = self
                .state
                .started_at
                .map(|t| t.elapsed())
                .unwrap_or_default();
            if elapsed <= self.restart_threshold {
                let index = self.prev_index();
                let autoplay = self.state.is_playing;
                self.load_track(backend, index, autoplay);
            } else {
                backend.rewind();
                self.state.is_playing = false;
                self.state.has_started = false;
                self.state.started_at = None;
            }
        } else {
            let index = self.prev_index();
            let autoplay = self.state.is_playing;
            self.load_track(backend, index, autoplay);
        }
    }

    /// Next button: advance one track, wrapping at the end of the library.
    /// Keeps playing if we were playing, stays paused otherwise.
    pub fn on_next<B: AudioBackend>(&mut self, backend: &mut B) {
        let index = self.next_index();
        let autoplay = self.state.is_playing;
        self.load_track(backend, index, autoplay);
    }

    /// Natural end of the current track. Behaves exactly like the next
    /// button; callers only invoke this while a started track was playing,
    /// so the following track auto-plays.
    pub fn on_track_ended<B: AudioBackend>(&mut self, backend: &mut B) {
        self.on_next(backend);
    }

    fn prev_index(&self) -> usize {
        if self.state.current_index == 0 {
            self.tracks.len() - 1
        } else {
            self.state.current_index - 1
        }
    }

    fn next_index(&self) -> usize {
        if self.state.current_index == self.tracks.len() - 1 {
            0
        } else {
            self.state.current_index + 1
        }
    }

    /// Select `index`, reinitialize the output for that track's sample rate
    /// and hand the file over, optionally starting it immediately.
    fn load_track<B: AudioBackend>(&mut self, backend: &mut B, index: usize, autoplay: bool) {
        self.state.current_index = index;

        let track = &self.tracks[index];
        backend.initialize(track.sample_rate);
        backend.load(&track.path);

        if autoplay {
            backend.play();
            self.state.is_playing = true;
            self.state.has_started = true;
            self.state.started_at = Some(Instant::now());
        } else {
            self.state.is_playing = false;
            self.state.has_started = false;
            self.state.started_at = None;
        }
    }
}
