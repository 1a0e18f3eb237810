use std::sync::{Arc, Mutex};

use crate::player::PlaybackStatus;

/// Transport commands delivered to the control loop, from MPRIS or keys.
#[derive(Clone, Debug)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Next,
    Prev,
}

/// What the bus currently reports about the player.
#[derive(Debug, Default)]
pub(super) struct NowPlaying {
    pub(super) status: PlaybackStatus,
    pub(super) title: Option<String>,
}

/// Control-loop side of the service: pushes playback changes to the bus.
pub struct MprisHandle {
    pub(super) shared: Arc<Mutex<NowPlaying>>,
}

impl MprisHandle {
    pub fn update(&self, status: PlaybackStatus, title: Option<String>) {
        if let Ok(mut np) = self.shared.lock() {
            np.status = status;
            np.title = title;
        }
    }
}
