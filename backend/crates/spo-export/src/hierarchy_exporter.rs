use crate::{ExportReport, ProgressReporter, StoryMap};

use spo_ado::{TrackerResult, WorkItemDetails, WorkItemTracker};
use spo_core::{BacklogGraph, Epic, Feature, RemoteWorkItem, UserStory, WorkItemKind};

use log::debug;

/// Creates the Epic -> Feature -> Story tree one call at a time.
///
/// Depth-first in graph order: an epic, then each of its features, each
/// linked to the epic right after creation, then each feature's stories
/// the same way. Nothing is issued after the first failure, and items
/// already created stay in the tracker.
pub struct HierarchyExporter<'a> {
    tracker: &'a dyn WorkItemTracker,
    progress: &'a ProgressReporter<'a>,
}

impl<'a> HierarchyExporter<'a> {
    pub fn new(tracker: &'a dyn WorkItemTracker, progress: &'a ProgressReporter<'a>) -> Self {
        Self { tracker, progress }
    }

    pub async fn export(
        &self,
        graph: &BacklogGraph,
        story_map: &mut StoryMap,
        report: &mut ExportReport,
    ) -> TrackerResult<()> {
        for epic in &graph.epics {
            let epic_item = self.create_epic(epic).await?;
            report.epics_created += 1;

            for feature in &epic.features {
                let feature_item = self.create_feature(feature, &epic_item).await?;
                report.features_created += 1;
                report.parent_links += 1;

                for story in &feature.user_stories {
                    let story_item = self.create_story(story, &feature_item).await?;
                    report.stories_created += 1;
                    report.parent_links += 1;

                    story_map.register(&story.id, story_item);
                }
            }
        }

        Ok(())
    }

    async fn create_epic(&self, epic: &Epic) -> TrackerResult<RemoteWorkItem> {
        self.progress
            .emit(&format!("Creating Epic: \"{}\"", epic.epic));

        let item = self
            .tracker
            .create_work_item(
                WorkItemKind::Epic,
                &epic.epic,
                &WorkItemDetails::for_epic(epic),
            )
            .await?;
        debug!("Epic \"{}\" is #{}", epic.epic, item.id);

        Ok(item)
    }

    async fn create_feature(
        &self,
        feature: &Feature,
        epic_item: &RemoteWorkItem,
    ) -> TrackerResult<RemoteWorkItem> {
        self.progress
            .emit(&format!("Creating Feature: \"{}\"", feature.feature));

        let item = self
            .tracker
            .create_work_item(
                WorkItemKind::Feature,
                &feature.feature,
                &WorkItemDetails::for_feature(feature),
            )
            .await?;

        self.progress
            .emit(&format!("Linking Feature \"{}\" to Epic", feature.feature));
        self.tracker.link_parent(&item, epic_item).await?;

        Ok(item)
    }

    async fn create_story(
        &self,
        story: &UserStory,
        feature_item: &RemoteWorkItem,
    ) -> TrackerResult<RemoteWorkItem> {
        self.progress
            .emit(&format!("Creating User Story: \"{}\"", story.id));

        let item = self
            .tracker
            .create_work_item(
                WorkItemKind::UserStory,
                &story.story,
                &WorkItemDetails::for_story(story),
            )
            .await?;

        self.progress
            .emit(&format!("Linking Story \"{}\" to Feature", story.id));
        self.tracker.link_parent(&item, feature_item).await?;

        Ok(item)
    }
}
