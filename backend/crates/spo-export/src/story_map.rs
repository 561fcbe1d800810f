use spo_core::RemoteWorkItem;

use std::collections::HashMap;

use log::warn;

/// Story id -> remote work item, scoped to one export run.
///
/// Written only by the hierarchy stage and read by the linker afterwards.
/// Append-only: a second registration of the same id is ignored so
/// dependencies resolve to the first story carrying that id.
#[derive(Debug, Default)]
pub struct StoryMap {
    items: HashMap<String, RemoteWorkItem>,
}

impl StoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the id was already registered.
    pub fn register(&mut self, story_id: &str, item: RemoteWorkItem) -> bool {
        if self.items.contains_key(story_id) {
            warn!(
                "Story id {story_id} already exported as #{}; keeping the first registration",
                self.items[story_id].id
            );
            return false;
        }

        self.items.insert(story_id.to_string(), item);
        true
    }

    pub fn get(&self, story_id: &str) -> Option<&RemoteWorkItem> {
        self.items.get(story_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
