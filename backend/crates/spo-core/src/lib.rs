pub mod diagnostics;
pub mod error;
pub mod generation;
pub mod models;

#[cfg(test)]
mod tests;

pub use diagnostics::dependency_diagnostics::{DependencyCycle, DependencyDiagnostics, DependencyRef};
pub use error::{CoreError, Result as CoreResult};
pub use generation::backlog_generator::BacklogGenerator;
pub use generation::generation_error::{GenerationError, Result as GenerationResult};
pub use models::backlog_graph::BacklogGraph;
pub use models::epic::Epic;
pub use models::export_config::ExportConfig;
pub use models::feature::Feature;
pub use models::graph_counts::GraphCounts;
pub use models::rating::Rating;
pub use models::remote_work_item::RemoteWorkItem;
pub use models::user_story::UserStory;
pub use models::work_item_kind::WorkItemKind;
