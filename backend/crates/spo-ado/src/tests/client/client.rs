use crate::{AdoClient, AdoClientOptions, TrackerError};

use spo_core::{ExportConfig, WorkItemKind};

use std::time::Duration;

fn client(org: &str, project: &str) -> AdoClient {
    AdoClient::new(ExportConfig::new(org, project, "pat").unwrap())
}

#[test]
fn test_project_url_encodes_project_name() {
    let client = client("https://dev.azure.com/contoso/", "My Project");
    assert_eq!(
        client.project_url().unwrap().as_str(),
        "https://dev.azure.com/contoso/_apis/projects/My%20Project?api-version=7.1-preview.4"
    );
}

#[test]
fn test_create_url_uses_type_segment() {
    let client = client("https://dev.azure.com/contoso", "Shop");
    assert_eq!(
        client.create_url(WorkItemKind::Epic).unwrap().as_str(),
        "https://dev.azure.com/contoso/Shop/_apis/wit/workitems/$Epic?api-version=7.1-preview.3"
    );
    assert_eq!(
        client.create_url(WorkItemKind::UserStory).unwrap().as_str(),
        "https://dev.azure.com/contoso/Shop/_apis/wit/workitems/$User%20Story?api-version=7.1-preview.3"
    );
}

#[test]
fn test_item_url_appends_api_version() {
    let client = client("https://dev.azure.com/contoso", "Shop");
    assert_eq!(
        client
            .item_url("https://dev.azure.com/contoso/_apis/wit/workItems/42")
            .unwrap()
            .as_str(),
        "https://dev.azure.com/contoso/_apis/wit/workItems/42?api-version=7.1-preview.3"
    );
}

#[test]
fn test_unparseable_org_url_is_invalid_url() {
    let client = client("contoso", "Shop");
    assert!(matches!(
        client.project_url(),
        Err(TrackerError::InvalidUrl { .. })
    ));
}

#[test]
fn test_custom_api_versions_are_used() {
    let options = AdoClientOptions {
        api_version: "7.0".to_string(),
        projects_api_version: "6.0".to_string(),
        timeout: Some(Duration::from_secs(5)),
    };
    let client = AdoClient::with_options(
        ExportConfig::new("https://dev.azure.com/contoso", "Shop", "pat").unwrap(),
        options.clone(),
    )
    .unwrap();

    assert_eq!(client.options(), &options);
    assert!(client.project_url().unwrap().as_str().ends_with("api-version=6.0"));
    assert!(
        client
            .create_url(WorkItemKind::Feature)
            .unwrap()
            .as_str()
            .ends_with("$Feature?api-version=7.0")
    );
}
