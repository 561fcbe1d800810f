pub(crate) mod progress_reporter;
pub(crate) mod progress_sink;
