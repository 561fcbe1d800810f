//! Azure DevOps work item client.
//!
//! Wraps the three calls an export needs (create, parent link, dependency
//! link) plus the project lookup used to test a connection, and normalizes
//! every failure into [`TrackerError`].

pub(crate) mod client;
pub(crate) mod patch;
pub(crate) mod tracker;

#[cfg(test)]
mod tests;

pub use client::{AdoClient, AdoClientOptions, TrackerError, TrackerResult};
pub use patch::{
    patch_document::{PatchDocument, PatchOperation},
    relation_kind::RelationKind,
    work_item_details::WorkItemDetails,
};
pub use tracker::WorkItemTracker;
