//! Export orchestration: drives a backlog graph through a remote tracker.
//!
//! Two stages with a barrier between them:
//!
//! 1. [`HierarchyExporter`] creates every Epic, Feature and Story strictly
//!    sequentially, linking each child to its parent right after creation.
//!    The first failure aborts the export.
//! 2. [`DependencyLinker`] runs once every story exists and issues all
//!    dependency links concurrently (bounded), waiting for every one to
//!    settle. Link failures are reported, never fatal.
//!
//! Exports are not idempotent: running the same graph twice creates a second
//! remote hierarchy.

mod dependency_linker;
mod error;
mod export_report;
mod export_settings;
mod hierarchy_exporter;
mod pipeline;
mod progress;
mod story_map;

#[cfg(test)]
mod tests;

pub use dependency_linker::DependencyLinker;
pub use error::{ExportError, Result as ExportResult};
pub use export_report::{ExportReport, LinkFailure, SkipReason, SkippedDependency};
pub use export_settings::ExportSettings;
pub use hierarchy_exporter::HierarchyExporter;
pub use pipeline::{export_backlog, generate_and_export};
pub use progress::{
    progress_reporter::ProgressReporter,
    progress_sink::{NoProgress, ProgressSink},
};
pub use story_map::StoryMap;

pub(crate) const MSG_STARTING: &str = "Starting export to Azure DevOps...";
pub(crate) const MSG_HIERARCHY_DONE: &str = "All work items created. Adding dependency links...";
pub(crate) const MSG_COMPLETE: &str = "Export complete!";
