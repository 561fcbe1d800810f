use serde::{Deserialize, Serialize};

/// Handle to an item created in the remote tracker during one export run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteWorkItem {
    pub id: u64,
    /// Canonical API URL; target of follow-up PATCHes and relation links.
    pub url: String,
}

impl RemoteWorkItem {
    pub fn new(id: u64, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }
}
