//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::config::UiSettings;
use crate::player::{Controller, PlaybackStatus};

const CONTROLS_TEXT: &str =
    "[h/←] previous | [space/p] play/pause | [l/→] next | [q] close";

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Build the status line: playback state plus the current track title.
fn status_text(controller: &Controller) -> String {
    let track = controller.current();
    let mut line = match controller.state.status() {
        PlaybackStatus::Playing => format!("Playing: {}", track.display()),
        PlaybackStatus::Paused => format!("Paused: {}", track.display()),
        PlaybackStatus::Stopped => format!("Stopped: {}", track.display()),
    };

    if let Some(total) = track.duration {
        line.push_str(&format!(" [{}]", format_mmss(total)));
    }
    line
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, controller: &Controller, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" audiophile ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = Paragraph::new(status_text(controller))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Library list, current track highlighted.
    let items: Vec<ListItem> = controller
        .tracks
        .iter()
        .map(|t| ListItem::new(t.display()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" library "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(controller.state.current_index));
    frame.render_stateful_widget(list, chunks[2], &mut state);

    // Footer
    let footer = Paragraph::new(CONTROLS_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Track;
    use std::path::PathBuf;

    fn track(name: &str, artist: Option<&str>, title: Option<&str>) -> Track {
        Track {
            path: PathBuf::from(format!("/tmp/{name}.mp3")),
            name: name.into(),
            title: title.map(Into::into),
            artist: artist.map(Into::into),
            duration: Some(Duration::from_secs(125)),
            sample_rate: 44_100,
        }
    }

    #[test]
    fn format_mmss_pads_minutes_and_seconds() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(65)), "01:05");
        assert_eq!(format_mmss(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn status_text_shows_state_title_and_duration() {
        let mut c = Controller::new(
            vec![track("bad guy", Some("Billie Eilish"), Some("bad guy"))],
            Duration::from_secs(2),
        );
        assert_eq!(
            status_text(&c),
            "Stopped: Billie Eilish - bad guy [02:05]"
        );

        c.state.has_started = true;
        c.state.is_playing = true;
        assert_eq!(
            status_text(&c),
            "Playing: Billie Eilish - bad guy [02:05]"
        );

        c.state.is_playing = false;
        assert_eq!(status_text(&c), "Paused: Billie Eilish - bad guy [02:05]");
    }
}
