use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};
use std::time::Duration;

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{OwnedValue, Value};

use crate::player::PlaybackStatus;

use super::handle::{ControlCmd, MprisHandle, NowPlaying};

const BUS_NAME: &str = "org.mpris.MediaPlayer2.audiophile";
const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

/// Application-level interface: identity and quit.
pub(super) struct AppIface {
    pub(super) tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl AppIface {
    pub(super) fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "audiophile"
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }
}

/// Player-level interface: the transport commands plus status/metadata.
pub(super) struct TransportIface {
    pub(super) tx: Sender<ControlCmd>,
    pub(super) shared: Arc<Mutex<NowPlaying>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl TransportIface {
    pub(super) fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    pub(super) fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    pub(super) fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    pub(super) fn stop(&self) {
        // No standalone stop; pausing is the closest transport action.
        let _ = self.tx.send(ControlCmd::Pause);
    }

    pub(super) fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    pub(super) fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    #[zbus(property)]
    pub(super) fn playback_status(&self) -> &str {
        let status = self
            .shared
            .lock()
            .map(|np| np.status)
            .unwrap_or(PlaybackStatus::Stopped);
        status_str(status)
    }

    #[zbus(property)]
    pub(super) fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let title = self.shared.lock().ok().and_then(|np| np.title.clone());
        if let Some(title) = title {
            if let Ok(v) = OwnedValue::try_from(Value::from(title)) {
                map.insert("xesam:title".to_string(), v);
            }
        }
        map
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }
}

/// The playback-status vocabulary the MPRIS interface defines.
pub(super) fn status_str(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Stopped => "Stopped",
        PlaybackStatus::Playing => "Playing",
        PlaybackStatus::Paused => "Paused",
    }
}

async fn serve(tx: Sender<ControlCmd>, shared: Arc<Mutex<NowPlaying>>) -> zbus::Result<()> {
    let connection = Connection::session().await?;
    connection.request_name(BUS_NAME).await?;

    let server = connection.object_server();
    server.at(OBJECT_PATH, AppIface { tx: tx.clone() }).await?;
    server.at(OBJECT_PATH, TransportIface { tx, shared }).await?;

    // The connection answers calls on its own task; this one only has to
    // keep the objects alive.
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

/// Start the bus service on a helper thread. Commands arrive through `tx`;
/// the returned handle feeds playback changes back to the bus.
pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let shared = Arc::new(Mutex::new(NowPlaying::default()));

    let shared_for_service = shared.clone();
    std::thread::spawn(move || {
        // A session without a usable bus just means no media keys.
        if let Err(e) = block_on(serve(tx, shared_for_service)) {
            eprintln!("audiophile: media keys unavailable: {e}");
        }
    });

    MprisHandle { shared }
}
