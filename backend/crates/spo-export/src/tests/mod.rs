
use spo_ado::{RelationKind, TrackerError, TrackerResult, WorkItemDetails, WorkItemTracker};
use spo_core::{BacklogGraph, Epic, Feature, RemoteWorkItem, UserStory, WorkItemKind};

use std::collections::{HashMap, HashSet};
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// One tracker call, identified by remote ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Create { kind: WorkItemKind, title: String },
    LinkParent { child: u64, parent: u64 },
    LinkDependency { story: u64, dependency: u64 },
}

/// In-memory tracker that records every call and assigns ids from 1.
pub(crate) struct RecordingTracker {
    calls: Mutex<Vec<Call>>,
    kinds: Mutex<HashMap<u64, WorkItemKind>>,
    next_id: AtomicU64,
    fail_create: Option<(WorkItemKind, u16)>,
    fail_parent_link: Option<(WorkItemKind, u16)>,
    fail_dependencies: HashSet<(u64, u64)>,
    link_delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl RecordingTracker {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            kinds: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            fail_create: None,
            fail_parent_link: None,
            fail_dependencies: HashSet::new(),
            link_delay: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Reject every creation of `kind` with `status`.
    pub(crate) fn failing_create(mut self, kind: WorkItemKind, status: u16) -> Self {
        self.fail_create = Some((kind, status));
        self
    }

    /// Reject every parent link whose child is a `child_kind` item.
    pub(crate) fn failing_parent_link(mut self, child_kind: WorkItemKind, status: u16) -> Self {
        self.fail_parent_link = Some((child_kind, status));
        self
    }

    /// Reject the dependency link from item `story` to item `dependency` with a 500.
    pub(crate) fn failing_dependency(mut self, story: u64, dependency: u64) -> Self {
        self.fail_dependencies.insert((story, dependency));
        self
    }

    pub(crate) fn with_link_delay(mut self, delay: Duration) -> Self {
        self.link_delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub(crate) fn url_for(id: u64) -> String {
        format!("https://dev.azure.test/org/_apis/wit/workItems/{id}")
    }
}

#[async_trait]
impl WorkItemTracker for RecordingTracker {
    async fn create_work_item(
        &self,
        kind: WorkItemKind,
        title: &str,
        _details: &WorkItemDetails,
    ) -> TrackerResult<RemoteWorkItem> {
        self.record(Call::Create {
            kind,
            title: title.to_string(),
        });

        if let Some((failing_kind, status)) = self.fail_create
            && failing_kind == kind
        {
            return Err(TrackerError::Create {
                kind,
                status,
                details: "TF400813: The user is not authorized to access this resource.".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.kinds.lock().unwrap().insert(id, kind);
        Ok(RemoteWorkItem::new(id, Self::url_for(id)))
    }

    async fn link_parent(
        &self,
        child: &RemoteWorkItem,
        parent: &RemoteWorkItem,
    ) -> TrackerResult<()> {
        self.record(Call::LinkParent {
            child: child.id,
            parent: parent.id,
        });

        let child_kind = self.kinds.lock().unwrap().get(&child.id).copied();
        if let Some((failing_kind, status)) = self.fail_parent_link
            && child_kind == Some(failing_kind)
        {
            return Err(TrackerError::Link {
                relation: RelationKind::Parent,
                target: parent.url.clone(),
                status,
                details: "TF401027: You need the Edit work items permission.".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    async fn link_dependency(
        &self,
        story: &RemoteWorkItem,
        dependency: &RemoteWorkItem,
    ) -> TrackerResult<()> {
        self.record(Call::LinkDependency {
            story: story.id,
            dependency: dependency.id,
        });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.link_delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_dependencies.contains(&(story.id, dependency.id)) {
            return Err(TrackerError::Link {
                relation: RelationKind::Dependency,
                target: story.url.clone(),
                status: 500,
                details: "Request failed with status 500 Internal Server Error".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

/// Collects progress lines in order.
#[derive(Default)]
pub(crate) struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl crate::ProgressSink for RecordingSink {
    fn on_progress(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

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

/// One epic, one feature, the given stories. Epic is #1, feature #2,
/// stories #3 onwards in order.
pub(crate) fn story_graph(stories: Vec<UserStory>) -> BacklogGraph {
    let feature = stories
        .into_iter()
        .fold(Feature::new("Feature", "desc"), Feature::with_story);
    BacklogGraph::new(vec![Epic::new("Epic", "desc").with_feature(feature)])
}

pub(crate) fn dependency_calls(calls: &[Call]) -> Vec<(u64, u64)> {
    calls
        .iter()
        .filter_map(|call| match call {
            Call::LinkDependency { story, dependency } => Some((*story, *dependency)),
            _ => None,
        })
        .collect()
}
