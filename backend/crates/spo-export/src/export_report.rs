use spo_core::DependencyRef;

use serde::Serialize;

/// Why a declared dependency produced no link request.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The dependency id matches no story in the graph
    UnknownStory,
    /// The story lists itself as a dependency
    SelfReference,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedDependency {
    #[serde(flatten)]
    pub reference: DependencyRef,
    pub reason: SkipReason,
}

/// A dependency link the tracker rejected. The export still succeeded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinkFailure {
    #[serde(flatten)]
    pub reference: DependencyRef,
    pub status: Option<u16>,
    pub message: String,
}

/// Outcome of a completed export run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ExportReport {
    pub epics_created: usize,
    pub features_created: usize,
    pub stories_created: usize,
    pub parent_links: usize,
    pub dependency_links_attempted: usize,
    pub dependency_links_created: usize,
    pub link_failures: Vec<LinkFailure>,
    pub skipped_dependencies: Vec<SkippedDependency>,
}

impl ExportReport {
    pub fn work_items_created(&self) -> usize {
        self.epics_created + self.features_created + self.stories_created
    }

    /// True when every attempted dependency link was created.
    pub fn is_complete(&self) -> bool {
        self.link_failures.is_empty()
    }
}
