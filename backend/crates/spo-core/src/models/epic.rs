use crate::Feature;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Epic {
    pub epic: String,
    #[serde(default)]
    pub epic_description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Epic {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            epic: title.into(),
            epic_description: description.into(),
            features: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}
