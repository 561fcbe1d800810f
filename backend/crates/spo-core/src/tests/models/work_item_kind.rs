use crate::WorkItemKind;

use std::str::FromStr;

#[test]
fn test_work_item_kind_as_str() {
    assert_eq!(WorkItemKind::Epic.as_str(), "Epic");
    assert_eq!(WorkItemKind::Feature.as_str(), "Feature");
    assert_eq!(WorkItemKind::UserStory.as_str(), "User Story");
}

#[test]
fn test_work_item_kind_from_str() {
    assert_eq!(
        WorkItemKind::from_str("User Story").unwrap(),
        WorkItemKind::UserStory
    );
    assert!(WorkItemKind::from_str("Task").is_err());
}

#[test]
fn test_work_item_kind_serializes_tracker_name() {
    let json = serde_json::to_string(&WorkItemKind::UserStory).unwrap();
    assert_eq!(json, "\"User Story\"");
}
