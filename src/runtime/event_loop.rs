use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{AudioBackend, Controller, PlaybackStatus};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

/// Watches for the natural end of a started track.
///
/// The backend reports "not busy" for a short window while the output
/// drains; advancing only after `grace` has passed since end was first
/// observed keeps the advance from mis-firing in that window.
struct TrackEndWatch {
    grace: Duration,
    detected_at: Option<Instant>,
}

impl TrackEndWatch {
    fn new(grace: Duration) -> Self {
        Self {
            grace,
            detected_at: None,
        }
    }

    /// Feed one poll-tick observation. `ended` is true when a started,
    /// playing track has no audio left. Returns true once the advance is due.
    fn observe(&mut self, ended: bool, now: Instant) -> bool {
        if !ended {
            self.detected_at = None;
            return false;
        }
        match self.detected_at {
            None => {
                self.detected_at = Some(now);
                false
            }
            Some(t) => {
                if now.duration_since(t) >= self.grace {
                    self.detected_at = None;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Main terminal loop: draws the UI, drains MPRIS commands, handles keys and
/// advances past finished tracks. Returns `Ok(())` when shutdown is requested.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut Controller,
    backend: &mut B,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut end_watch = TrackEndWatch::new(Duration::from_millis(
        settings.playback.track_end_grace_ms,
    ));
    let mut last_status = controller.state.status();
    let mut last_index = controller.state.current_index;

    loop {
        terminal.draw(|f| ui::draw(f, controller, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, controller, backend) {
                backend.shutdown();
                return Ok(());
            }
        }

        // End-of-track check, once per tick.
        let ended =
            controller.state.has_started && controller.state.is_playing && !backend.is_busy();
        if end_watch.observe(ended, Instant::now()) {
            controller.on_track_ended(backend);
        }

        // Keep MPRIS in sync even when changes come from media keys or auto-advance.
        if controller.state.status() != last_status || controller.state.current_index != last_index
        {
            update_mpris(mpris, controller);
            last_status = controller.state.status();
            last_index = controller.state.current_index;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, controller, backend) {
                    backend.shutdown();
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one transport command. Returns true when the app should quit.
fn handle_control_cmd<B: AudioBackend>(
    cmd: ControlCmd,
    controller: &mut Controller,
    backend: &mut B,
) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if controller.state.status() != PlaybackStatus::Playing {
                controller.on_play_pause(backend);
            }
        }
        ControlCmd::Pause => {
            if controller.state.status() == PlaybackStatus::Playing {
                controller.on_play_pause(backend);
            }
        }
        ControlCmd::PlayPause => controller.on_play_pause(backend),
        ControlCmd::Next => controller.on_next(backend),
        ControlCmd::Prev => controller.on_previous(backend),
    }
    false
}

/// Apply one key press. Returns true when the app should quit.
fn handle_key_event<B: AudioBackend>(
    key: KeyEvent,
    controller: &mut Controller,
    backend: &mut B,
) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => controller.on_play_pause(backend),
        KeyCode::Char('h') | KeyCode::Left => controller.on_previous(backend),
        KeyCode::Char('l') | KeyCode::Right => controller.on_next(backend),
        _ => {}
    }
    false
}
