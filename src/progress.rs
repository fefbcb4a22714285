// src/progress.rs
/// Lightweight progress reporting for the long-running steps (harvest, enrich).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a counted phase with its number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item of the counted phase is done (e.g. a profile was fetched).
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end of a counted phase.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
