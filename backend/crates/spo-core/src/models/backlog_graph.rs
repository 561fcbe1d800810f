use crate::{DependencyDiagnostics, Epic, GenerationError, GenerationResult, GraphCounts, UserStory};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Ordered Epic -> Feature -> Story tree plus the story dependency edges.
///
/// Serializes as a bare JSON array of epics, the same shape the generation
/// step produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BacklogGraph {
    pub epics: Vec<Epic>,
}

impl BacklogGraph {
    pub fn new(epics: Vec<Epic>) -> Self {
        Self { epics }
    }

    /// Parse generator output into a graph.
    ///
    /// Anything that is not a JSON array of epics is a generation failure.
    #[track_caller]
    pub fn from_generated_json(text: &str) -> GenerationResult<Self> {
        serde_json::from_str(text.trim()).map_err(|e| GenerationError::MalformedOutput {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.epics.is_empty()
    }

    /// All stories in export order.
    pub fn stories(&self) -> impl Iterator<Item = &UserStory> {
        self.epics
            .iter()
            .flat_map(|epic| epic.features.iter())
            .flat_map(|feature| feature.user_stories.iter())
    }

    pub fn find_story(&self, id: &str) -> Option<&UserStory> {
        self.stories().find(|story| story.id == id)
    }

    pub fn counts(&self) -> GraphCounts {
        let mut counts = GraphCounts {
            epics: self.epics.len(),
            ..GraphCounts::default()
        };

        for epic in &self.epics {
            counts.features += epic.features.len();
            for feature in &epic.features {
                counts.stories += feature.user_stories.len();
                counts.dependency_edges += feature
                    .user_stories
                    .iter()
                    .map(|story| story.dependencies.len())
                    .sum::<usize>();
            }
        }

        counts
    }

    pub fn diagnostics(&self) -> DependencyDiagnostics {
        DependencyDiagnostics::analyze(self)
    }
}

impl From<Vec<Epic>> for BacklogGraph {
    fn from(epics: Vec<Epic>) -> Self {
        Self { epics }
    }
}
