use crate::{AdoClient, TrackerResult, WorkItemDetails};

use spo_core::{RemoteWorkItem, WorkItemKind};

use async_trait::async_trait;

/// The calls an export drives against a remote tracker.
///
/// [`AdoClient`] is the production implementation; tests substitute
/// recording fakes.
#[async_trait]
pub trait WorkItemTracker: Send + Sync {
    async fn create_work_item(
        &self,
        kind: WorkItemKind,
        title: &str,
        details: &WorkItemDetails,
    ) -> TrackerResult<RemoteWorkItem>;

    async fn link_parent(
        &self,
        child: &RemoteWorkItem,
        parent: &RemoteWorkItem,
    ) -> TrackerResult<()>;

    async fn link_dependency(
        &self,
        story: &RemoteWorkItem,
        dependency: &RemoteWorkItem,
    ) -> TrackerResult<()>;
}

#[async_trait]
impl WorkItemTracker for AdoClient {
    async fn create_work_item(
        &self,
        kind: WorkItemKind,
        title: &str,
        details: &WorkItemDetails,
    ) -> TrackerResult<RemoteWorkItem> {
        AdoClient::create_work_item(self, kind, title, details).await
    }

    async fn link_parent(
        &self,
        child: &RemoteWorkItem,
        parent: &RemoteWorkItem,
    ) -> TrackerResult<()> {
        AdoClient::link_parent(self, &child.url, &parent.url).await
    }

    async fn link_dependency(
        &self,
        story: &RemoteWorkItem,
        dependency: &RemoteWorkItem,
    ) -> TrackerResult<()> {
        AdoClient::link_dependency(self, &story.url, &dependency.url).await
    }
}
