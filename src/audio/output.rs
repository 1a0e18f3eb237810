use std::path::{Path, PathBuf};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::player::AudioBackend;

use super::sink::create_sink;

/// `rodio`-backed audio output.
///
/// Each `initialize` rebuilds the output stream so its sample rate matches
/// the incoming file; `load`/`rewind` recreate a paused sink from the loaded
/// path. A missing or undecodable file panics.
pub struct RodioBackend {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
}

impl RodioBackend {
    pub fn new() -> Self {
        Self {
            stream: None,
            sink: None,
            loaded: None,
        }
    }

    fn stream(&self) -> &OutputStream {
        self.stream
            .as_ref()
            .expect("audio output used before initialize")
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for RodioBackend {
    fn initialize(&mut self, sample_rate: u32) {
        // Drop the old sink before its stream.
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.stream = None;

        let mut stream = OutputStreamBuilder::from_default_device()
            .expect("ERR: No audio output device")
            .with_sample_rate(sample_rate)
            .open_stream_or_fallback()
            .expect("ERR: Failed to open audio output stream");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);
        self.stream = Some(stream);
    }

    fn load(&mut self, path: &Path) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.sink = Some(create_sink(self.stream(), path));
        self.loaded = Some(path.to_path_buf());
    }

    fn play(&mut self) {
        // A loaded/rewound sink sits paused at zero; a drained one needs to
        // be rebuilt before it can start from the beginning again.
        let needs_rebuild = self.sink.as_ref().map(|s| s.empty()).unwrap_or(true);
        if needs_rebuild {
            if let Some(path) = self.loaded.clone() {
                self.sink = Some(create_sink(self.stream(), &path));
            }
        }
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(ref s) = self.sink {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn rewind(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        if let Some(path) = self.loaded.clone() {
            self.sink = Some(create_sink(self.stream(), &path));
        }
    }

    fn is_busy(&self) -> bool {
        self.sink.as_ref().map(|s| !s.empty()).unwrap_or(false)
    }

    fn shutdown(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.stream = None;
        self.loaded = None;
    }
}
