use crate::{BacklogGraph, GenerationResult};

use async_trait::async_trait;

/// Turns a free-text requirement into a backlog graph.
///
/// How the graph is produced (model, prompt, transport) is up to the
/// implementation. The export engine only relies on receiving a graph or a
/// [`crate::GenerationError`].
#[async_trait]
pub trait BacklogGenerator: Send + Sync {
    async fn generate(
        &self,
        requirement: &str,
        knowledge_base: &str,
    ) -> GenerationResult<BacklogGraph>;
}
