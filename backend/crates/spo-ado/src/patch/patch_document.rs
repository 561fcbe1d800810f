use crate::patch::{
    FIELD_ACCEPTANCE_CRITERIA, FIELD_DESCRIPTION, FIELD_PRIORITY, FIELD_TITLE, RELATIONS_APPEND,
};
use crate::{RelationKind, WorkItemDetails};

use serde::Serialize;
use serde_json::{Value, json};

/// One `add` operation of a JSON patch document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PatchOperation {
    pub op: &'static str,
    pub path: &'static str,
    pub value: Value,
}

impl PatchOperation {
    pub fn add(path: &'static str, value: Value) -> Self {
        Self {
            op: "add",
            path,
            value,
        }
    }
}

/// Ordered list of patch operations, sent as `application/json-patch+json`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct PatchDocument(Vec<PatchOperation>);

impl PatchDocument {
    /// Field document for a new work item.
    ///
    /// Order is fixed: title, description (with risk/impact), acceptance
    /// criteria, priority. Absent fields are left out entirely.
    pub fn new_work_item(title: &str, details: &WorkItemDetails) -> Self {
        let mut operations = vec![PatchOperation::add(FIELD_TITLE, json!(title))];

        if let Some(description) = details.rendered_description() {
            operations.push(PatchOperation::add(FIELD_DESCRIPTION, json!(description)));
        }
        if let Some(criteria) = details.rendered_acceptance_criteria() {
            operations.push(PatchOperation::add(FIELD_ACCEPTANCE_CRITERIA, json!(criteria)));
        }
        if let Some(priority) = details.priority() {
            operations.push(PatchOperation::add(FIELD_PRIORITY, json!(priority)));
        }

        Self(operations)
    }

    /// Single relation-add operation pointing at `target_url`.
    pub fn add_relation(kind: RelationKind, target_url: &str) -> Self {
        Self(vec![PatchOperation::add(
            RELATIONS_APPEND,
            json!({
                "rel": kind.rel(),
                "url": target_url,
                "attributes": { "comment": kind.comment() }
            }),
        )])
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
