use serde::Serialize;

/// Node and edge totals for a backlog graph.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct GraphCounts {
    pub epics: usize,
    pub features: usize,
    pub stories: usize,
    pub dependency_edges: usize,
}

impl GraphCounts {
    /// Remote items a full export creates (one per node).
    pub fn work_items(&self) -> usize {
        self.epics + self.features + self.stories
    }

    /// Parent links a full export issues (every non-epic node).
    pub fn parent_links(&self) -> usize {
        self.features + self.stories
    }
}
