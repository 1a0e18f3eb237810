use std::path::Path;

/// The audio-output boundary consumed by the `Controller`.
///
/// The production implementation lives in `crate::audio`; tests use a
/// recording mock. Backends are expected to fail loudly on unreadable
/// files rather than recover.
pub trait AudioBackend {
    /// (Re)initialize the output for the given sample rate. Called before
    /// every `load` so the output matches the incoming file.
    fn initialize(&mut self, sample_rate: u32);
    /// Load `path` and leave it paused at position zero.
    fn load(&mut self, path: &Path);
    /// Start the loaded file from the beginning.
    fn play(&mut self);
    /// Pause output, keeping the current position.
    fn pause(&mut self);
    /// Resume output from the paused position.
    fn unpause(&mut self);
    /// Seek the loaded file back to position zero, leaving output paused.
    fn rewind(&mut self);
    /// Whether the backend still has audio queued for the current file.
    fn is_busy(&self) -> bool;
    /// Tear the output down. No other call is valid afterwards.
    fn shutdown(&mut self);
}
