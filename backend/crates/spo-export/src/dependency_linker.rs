use crate::{ExportReport, LinkFailure, ProgressReporter, SkipReason, SkippedDependency, StoryMap};

use spo_ado::WorkItemTracker;
use spo_core::{BacklogGraph, DependencyRef, RemoteWorkItem};

use futures::stream::{self, StreamExt};
use log::{error, warn};

/// One resolved `story -> dependency` link waiting to be issued.
struct PlannedLink<'m> {
    reference: DependencyRef,
    story: &'m RemoteWorkItem,
    dependency: &'m RemoteWorkItem,
}

/// Issues every dependency link once the hierarchy exists.
///
/// Links run concurrently, at most `max_concurrent_links` at a time, and
/// the linker waits for all of them to settle. A rejected link is recorded
/// in the report and never stops the others.
pub struct DependencyLinker<'a> {
    tracker: &'a dyn WorkItemTracker,
    progress: &'a ProgressReporter<'a>,
    max_concurrent_links: usize,
}

impl<'a> DependencyLinker<'a> {
    pub fn new(
        tracker: &'a dyn WorkItemTracker,
        progress: &'a ProgressReporter<'a>,
        max_concurrent_links: usize,
    ) -> Self {
        Self {
            tracker,
            progress,
            max_concurrent_links: max_concurrent_links.max(1),
        }
    }

    pub async fn link(&self, graph: &BacklogGraph, story_map: &StoryMap, report: &mut ExportReport) {
        let planned = self.plan(graph, story_map, report);
        report.dependency_links_attempted = planned.len();

        let tracker = self.tracker;
        let mut outcomes: Vec<_> = stream::iter(planned.into_iter().enumerate())
            .map(|(index, link)| async move {
                let result = tracker.link_dependency(link.story, link.dependency).await;
                (index, link.reference, result)
            })
            .buffer_unordered(self.max_concurrent_links)
            .collect()
            .await;

        // Report failures in declaration order regardless of completion order.
        outcomes.sort_by_key(|(index, _, _)| *index);

        for (_, reference, result) in outcomes {
            match result {
                Ok(()) => report.dependency_links_created += 1,
                Err(err) => report.link_failures.push(LinkFailure {
                    reference,
                    status: err.status(),
                    message: err.to_string(),
                }),
            }
        }

        if !report.link_failures.is_empty() {
            warn!(
                "{} dependency links failed to be created.",
                report.link_failures.len()
            );
            for failure in &report.link_failures {
                error!("{}: {}", failure.reference, failure.message);
            }
        }
    }

    /// Resolve every declared dependency against the run's story map,
    /// emitting one progress line per link that will be issued.
    fn plan<'m>(
        &self,
        graph: &BacklogGraph,
        story_map: &'m StoryMap,
        report: &mut ExportReport,
    ) -> Vec<PlannedLink<'m>> {
        let mut planned = Vec::new();

        for story in graph.stories() {
            for dependency_id in &story.dependencies {
                let reference = DependencyRef {
                    story_id: story.id.clone(),
                    dependency_id: dependency_id.clone(),
                };

                if dependency_id == &story.id {
                    report.skipped_dependencies.push(SkippedDependency {
                        reference,
                        reason: SkipReason::SelfReference,
                    });
                    continue;
                }

                let (Some(story_item), Some(dependency_item)) =
                    (story_map.get(&story.id), story_map.get(dependency_id))
                else {
                    report.skipped_dependencies.push(SkippedDependency {
                        reference,
                        reason: SkipReason::UnknownStory,
                    });
                    continue;
                };

                self.progress
                    .emit(&format!("Linking {} -> {}", story.id, dependency_id));
                planned.push(PlannedLink {
                    reference,
                    story: story_item,
                    dependency: dependency_item,
                });
            }
        }

        planned
    }
}
