use crate::UserStory;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    pub feature: String,
    #[serde(default)]
    pub feature_description: String,
    #[serde(default)]
    pub user_stories: Vec<UserStory>,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            feature: title.into(),
            feature_description: description.into(),
            user_stories: Vec::new(),
        }
    }

    pub fn with_story(mut self, story: UserStory) -> Self {
        self.user_stories.push(story);
        self
    }
}
