use crate::ProgressSink;

use std::panic::{AssertUnwindSafe, catch_unwind};

use log::{info, warn};

/// Forwards progress to a caller's sink and mirrors it to the log.
pub struct ProgressReporter<'a> {
    sink: &'a dyn ProgressSink,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(sink: &'a dyn ProgressSink) -> Self {
        Self { sink }
    }

    pub fn emit(&self, message: &str) {
        info!("{message}");

        if catch_unwind(AssertUnwindSafe(|| self.sink.on_progress(message))).is_err() {
            warn!("Progress sink panicked while handling: {message}");
        }
    }
}
