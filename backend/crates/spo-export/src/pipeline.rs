use crate::{
    DependencyLinker, ExportReport, ExportResult, ExportSettings, HierarchyExporter,
    MSG_COMPLETE, MSG_HIERARCHY_DONE, MSG_STARTING, ProgressReporter, ProgressSink, StoryMap,
};

use spo_ado::WorkItemTracker;
use spo_core::{BacklogGenerator, BacklogGraph};

use log::{info, warn};

/// Export a backlog graph to the tracker.
///
/// Fails with the first hierarchy error; dependency-link failures are
/// returned in the report instead. An empty graph completes without any
/// tracker call.
pub async fn export_backlog(
    tracker: &dyn WorkItemTracker,
    graph: &BacklogGraph,
    settings: &ExportSettings,
    sink: &dyn ProgressSink,
) -> ExportResult<ExportReport> {
    let progress = ProgressReporter::new(sink);

    for warning in graph.diagnostics().warnings() {
        warn!("{warning}");
    }

    progress.emit(MSG_STARTING);

    let mut story_map = StoryMap::new();
    let mut report = ExportReport::default();

    HierarchyExporter::new(tracker, &progress)
        .export(graph, &mut story_map, &mut report)
        .await?;

    progress.emit(MSG_HIERARCHY_DONE);

    DependencyLinker::new(tracker, &progress, settings.max_concurrent_links)
        .link(graph, &story_map, &mut report)
        .await;

    progress.emit(MSG_COMPLETE);
    info!(
        "Created {} work items, {} of {} dependency links",
        report.work_items_created(),
        report.dependency_links_created,
        report.dependency_links_attempted
    );

    Ok(report)
}

/// Generate a graph from a requirement, then export it.
///
/// A generation failure is returned before any tracker call is made.
pub async fn generate_and_export(
    generator: &dyn BacklogGenerator,
    requirement: &str,
    knowledge_base: &str,
    tracker: &dyn WorkItemTracker,
    settings: &ExportSettings,
    sink: &dyn ProgressSink,
) -> ExportResult<(BacklogGraph, ExportReport)> {
    let graph = generator.generate(requirement, knowledge_base).await?;
    let counts = graph.counts();
    info!(
        "Generated {} epics, {} features, {} stories",
        counts.epics, counts.features, counts.stories
    );

    let report = export_backlog(tracker, &graph, settings, sink).await?;
    Ok((graph, report))
}
