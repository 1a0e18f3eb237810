use std::env;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::RodioBackend;
use crate::library::scan;
use crate::mpris::ControlCmd;
use crate::player::Controller;

mod event_loop;
mod mpris_sync;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let dir = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.library.directory.clone());

    let tracks = scan(Path::new(&dir), &settings.library);
    if tracks.is_empty() {
        return Err(format!("no audio files found in {dir}").into());
    }

    let mut controller = Controller::new(
        tracks,
        Duration::from_millis(settings.playback.restart_threshold_ms),
    );

    // Prime the output with the first track so play starts instantly.
    let mut backend = RodioBackend::new();
    controller.load_current(&mut backend);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());
    mpris_sync::update_mpris(&mpris, &controller);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend_term = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_term)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut controller,
        &mut backend,
        &mpris,
        &control_rx,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
