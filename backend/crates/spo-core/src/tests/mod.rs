mod models;

use crate::{BacklogGraph, Epic, Feature, UserStory};

/// Checkout epic with one Cart feature: S1 (no deps) and S2 (depends on S1).
pub(crate) fn checkout_graph() -> BacklogGraph {
    BacklogGraph::new(vec![
        Epic::new("Checkout", "Let shoppers pay").with_feature(
            Feature::new("Cart", "Hold items before purchase")
                .with_story(UserStory::new("S1", "As a shopper, I want to add items"))
                .with_story(
                    UserStory::new("S2", "As a shopper, I want to remove items")
                        .with_dependencies(["S1"]),
                ),
        ),
    ])
}

pub(crate) fn story_graph(stories: Vec<UserStory>) -> BacklogGraph {
    let feature = stories
        .into_iter()
        .fold(Feature::new("Feature", "desc"), Feature::with_story);
    BacklogGraph::new(vec![Epic::new("Epic", "desc").with_feature(feature)])
}
