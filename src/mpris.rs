//! Media-key remote control over the session D-Bus.
//!
//! Exposes the `org.mpris.MediaPlayer2` interfaces so desktop media keys
//! (and tools like `playerctl`) drive the same transport commands as the
//! keyboard.

mod handle;
mod service;

pub use handle::{ControlCmd, MprisHandle};
pub use service::spawn_mpris;
