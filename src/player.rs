//! Playback control: the state machine behind the transport buttons.
//!
//! The `Controller` owns the library and the current `PlaybackState` and
//! drives an `AudioBackend` implementation in response to the four transport
//! actions (play/pause, previous, next, end-of-track).

mod backend;
mod controller;
mod state;

pub use backend::AudioBackend;
pub use controller::Controller;
pub use state::PlaybackStatus;

#[cfg(test)]
mod tests;
