pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod options;

pub use client::AdoClient;
pub use error::{Result as TrackerResult, TrackerError};
pub use options::AdoClientOptions;
