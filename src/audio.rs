//! Audio output: the `rodio` implementation of the backend boundary.

mod output;
mod sink;

pub use output::RodioBackend;
