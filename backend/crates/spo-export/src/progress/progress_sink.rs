/// Receives human-readable progress lines while an export runs.
///
/// Called synchronously, in order, with no buffering. Implementations
/// cannot fail; a panic inside a sink is caught and logged.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_progress(&self, message: &str) {
        self(message)
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _message: &str) {}
}
