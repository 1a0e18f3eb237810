//! Utilities for creating `rodio` sinks from audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at position zero.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

/// Create a paused `Sink` for the file at `path`, positioned at zero.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> Sink {
    let file = File::open(path).unwrap_or_else(|_| panic!("failed to open {:?}", path));

    let source =
        Decoder::new(BufReader::new(file)).unwrap_or_else(|_| panic!("failed to decode {:?}", path));

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    sink
}
