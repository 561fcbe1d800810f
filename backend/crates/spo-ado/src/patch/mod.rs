pub(crate) mod patch_document;
pub(crate) mod relation_kind;
pub(crate) mod work_item_details;

pub(crate) const FIELD_TITLE: &str = "/fields/System.Title";
pub(crate) const FIELD_DESCRIPTION: &str = "/fields/System.Description";
pub(crate) const FIELD_ACCEPTANCE_CRITERIA: &str = "/fields/Microsoft.VSTS.Common.AcceptanceCriteria";
pub(crate) const FIELD_PRIORITY: &str = "/fields/Microsoft.VSTS.Common.Priority";
pub(crate) const RELATIONS_APPEND: &str = "/relations/-";
