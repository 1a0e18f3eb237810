use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::*;
use crate::library::Track;

fn t(name: &str) -> Track {
    Track {
        path: PathBuf::from(format!("/tmp/music/{name}.mp3")),
        name: name.into(),
        title: None,
        artist: None,
        duration: None,
        sample_rate: 44_100,
    }
}

fn controller(names: &[&str]) -> Controller {
    let tracks = names.iter().map(|n| t(n)).collect();
    Controller::new(tracks, Duration::from_secs(2))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Initialize(u32),
    Load(PathBuf),
    Play,
    Pause,
    Unpause,
    Rewind,
    Shutdown,
}

#[derive(Default)]
struct MockBackend {
    calls: Vec<Call>,
    busy: bool,
}

impl AudioBackend for MockBackend {
    fn initialize(&mut self, sample_rate: u32) {
        self.calls.push(Call::Initialize(sample_rate));
    }
    fn load(&mut self, path: &Path) {
        self.calls.push(Call::Load(path.to_path_buf()));
    }
    fn play(&mut self) {
        self.calls.push(Call::Play);
        self.busy = true;
    }
    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }
    fn unpause(&mut self) {
        self.calls.push(Call::Unpause);
    }
    fn rewind(&mut self) {
        self.calls.push(Call::Rewind);
    }
    fn is_busy(&self) -> bool {
        self.busy
    }
    fn shutdown(&mut self) {
        self.calls.push(Call::Shutdown);
        self.busy = false;
    }
}

fn long_ago() -> Option<Instant> {
    Instant::now().checked_sub(Duration::from_secs(10))
}

#[test]
fn play_pause_toggles_is_playing_and_keeps_index() {
    let mut c = controller(&["A", "B"]);
    let mut b = MockBackend::default();

    c.on_play_pause(&mut b);
    assert!(c.state.is_playing);
    assert!(c.state.has_started);
    assert!(c.state.started_at.is_some());
    assert_eq!(c.state.current_index, 0);
    assert_eq!(b.calls, vec![Call::Play]);

    c.on_play_pause(&mut b);
    assert!(!c.state.is_playing);
    assert!(c.state.has_started);
    assert_eq!(c.state.current_index, 0);
    assert_eq!(b.calls, vec![Call::Play, Call::Pause]);

    c.on_play_pause(&mut b);
    assert!(c.state.is_playing);
    assert_eq!(c.state.current_index, 0);
    assert_eq!(b.calls, vec![Call::Play, Call::Pause, Call::Unpause]);
}

#[test]
fn first_play_starts_from_zero_not_unpause() {
    let mut c = controller(&["A"]);
    let mut b = MockBackend::default();

    assert!(!c.state.has_started);
    c.on_play_pause(&mut b);
    assert_eq!(b.calls, vec![Call::Play]);
}

#[test]
fn next_wraps_through_three_track_library() {
    let mut c = controller(&["A", "B", "C"]);
    let mut b = MockBackend::default();

    c.on_next(&mut b);
    assert_eq!(c.state.current_index, 1);
    c.on_next(&mut b);
    assert_eq!(c.state.current_index, 2);
    c.on_next(&mut b);
    assert_eq!(c.state.current_index, 0);
}

#[test]
fn next_applied_library_len_times_returns_to_start() {
    let mut c = controller(&["A", "B", "C", "D", "E"]);
    let mut b = MockBackend::default();

    for _ in 0..c.tracks.len() {
        c.on_next(&mut b);
    }
    assert_eq!(c.state.current_index, 0);
}

#[test]
fn previous_from_index_zero_wraps_to_last_without_autoplay() {
    let mut c = controller(&["A", "B", "C"]);
    let mut b = MockBackend::default();

    assert!(!c.state.has_started);
    c.on_previous(&mut b);

    assert_eq!(c.state.current_index, 2);
    assert!(!c.state.is_playing);
    assert!(!c.state.has_started);
    assert!(!b.calls.contains(&Call::Play));
    assert_eq!(
        b.calls,
        vec![
            Call::Initialize(44_100),
            Call::Load(PathBuf::from("/tmp/music/C.mp3")),
        ]
    );
}

#[test]
fn previous_within_threshold_skips_to_prior_track() {
    let mut c = controller(&["A", "B", "C"]);
    let mut b = MockBackend::default();

    c.on_next(&mut b); // index 1
    c.on_play_pause(&mut b); // just started
    b.calls.clear();

    c.on_previous(&mut b);
    assert_eq!(c.state.current_index, 0);
    // Was playing, so the prior track auto-plays.
    assert!(c.state.is_playing);
    assert!(c.state.has_started);
    assert_eq!(
        b.calls,
        vec![
            Call::Initialize(44_100),
            Call::Load(PathBuf::from("/tmp/music/A.mp3")),
            Call::Play,
        ]
    );
}

#[test]
fn previous_past_threshold_restarts_current_track() {
    let mut c = controller(&["A", "B", "C"]);
    let mut b = MockBackend::default();

    c.on_next(&mut b); // index 1
    c.on_play_pause(&mut b);
    c.state.started_at = long_ago();
    b.calls.clear();

    c.on_previous(&mut b);
    assert_eq!(c.state.current_index, 1);
    assert_eq!(b.calls, vec![Call::Rewind]);
    // Rewound to zero, paused; next play action starts fresh.
    assert!(!c.state.is_playing);
    assert!(!c.state.has_started);
    assert!(c.state.started_at.is_none());

    c.on_play_pause(&mut b);
    assert_eq!(b.calls, vec![Call::Rewind, Call::Play]);
}

#[test]
fn previous_past_threshold_while_paused_also_restarts() {
    let mut c = controller(&["A", "B"]);
    let mut b = MockBackend::default();

    c.on_play_pause(&mut b);
    c.on_play_pause(&mut b); // paused, has_started still true
    c.state.started_at = long_ago();
    b.calls.clear();

    c.on_previous(&mut b);
    assert_eq!(c.state.current_index, 0);
    assert_eq!(b.calls, vec![Call::Rewind]);
    assert!(!c.state.has_started);
}

#[test]
fn next_while_paused_loads_without_autoplay() {
    let mut c = controller(&["A", "B"]);
    let mut b = MockBackend::default();

    c.on_play_pause(&mut b);
    c.on_play_pause(&mut b); // paused
    b.calls.clear();

    c.on_next(&mut b);
    assert_eq!(c.state.current_index, 1);
    assert!(!c.state.is_playing);
    assert!(!c.state.has_started);
    assert!(!b.calls.contains(&Call::Play));
}

#[test]
fn track_ended_advances_and_autoplays() {
    let mut c = controller(&["A", "B", "C"]);
    let mut b = MockBackend::default();

    c.on_play_pause(&mut b);
    b.calls.clear();

    c.on_track_ended(&mut b);
    assert_eq!(c.state.current_index, 1);
    assert!(c.state.is_playing);
    assert_eq!(
        b.calls,
        vec![
            Call::Initialize(44_100),
            Call::Load(PathBuf::from("/tmp/music/B.mp3")),
            Call::Play,
        ]
    );
}

#[test]
fn track_ended_on_last_track_wraps_to_first() {
    let mut c = controller(&["A", "B"]);
    let mut b = MockBackend::default();

    c.on_next(&mut b); // index 1
    c.on_play_pause(&mut b);
    b.calls.clear();

    c.on_track_ended(&mut b);
    assert_eq!(c.state.current_index, 0);
    assert!(c.state.is_playing);
}

#[test]
fn load_initializes_output_with_the_new_tracks_sample_rate() {
    let mut tracks = vec![t("A"), t("B")];
    tracks[1].sample_rate = 48_000;
    let mut c = Controller::new(tracks, Duration::from_secs(2));
    let mut b = MockBackend::default();

    c.on_next(&mut b);
    assert_eq!(
        b.calls,
        vec![
            Call::Initialize(48_000),
            Call::Load(PathBuf::from("/tmp/music/B.mp3")),
        ]
    );
}

#[test]
fn single_track_library_wraps_onto_itself() {
    let mut c = controller(&["A"]);
    let mut b = MockBackend::default();

    c.on_next(&mut b);
    assert_eq!(c.state.current_index, 0);
    c.on_previous(&mut b);
    assert_eq!(c.state.current_index, 0);
}

#[test]
fn status_reflects_the_three_states() {
    let mut c = controller(&["A"]);
    let mut b = MockBackend::default();

    assert_eq!(c.state.status(), PlaybackStatus::Stopped);
    c.on_play_pause(&mut b);
    assert_eq!(c.state.status(), PlaybackStatus::Playing);
    c.on_play_pause(&mut b);
    assert_eq!(c.state.status(), PlaybackStatus::Paused);
}

#[test]
fn invariant_not_started_implies_not_playing() {
    let mut c = controller(&["A", "B", "C"]);
    let mut b = MockBackend::default();

    let check = |c: &Controller| {
        if !c.state.has_started {
            assert!(!c.state.is_playing);
            assert!(c.state.started_at.is_none());
        }
    };

    check(&c);
    c.on_next(&mut b);
    check(&c);
    c.on_previous(&mut b);
    check(&c);
    c.on_play_pause(&mut b);
    c.state.started_at = long_ago();
    c.on_previous(&mut b); // restart path
    check(&c);
}
