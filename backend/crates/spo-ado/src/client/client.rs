use crate::client::error::Result as TrackerResult;
use crate::{AdoClientOptions, PatchDocument, RelationKind, TrackerError, WorkItemDetails};

use spo_core::{ExportConfig, RemoteWorkItem, WorkItemKind};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// HTTP client for the Azure DevOps work item tracking API.
///
/// Stateless between calls: every request is built from the connection
/// triple it was created with, authenticated with basic auth (empty user,
/// access token as password).
pub struct AdoClient {
    config: ExportConfig,
    options: AdoClientOptions,
    client: ReqwestClient,
}

#[derive(Deserialize)]
struct CreatedWorkItem {
    id: u64,
    url: String,
}

#[derive(Deserialize)]
struct ProjectInfo {
    name: String,
}

impl AdoClient {
    /// Create a client with default api versions and no timeout.
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            options: AdoClientOptions::default(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client with explicit transport options.
    #[track_caller]
    pub fn with_options(config: ExportConfig, options: AdoClientOptions) -> TrackerResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| TrackerError::ClientBuild {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

        Ok(Self {
            config,
            options,
            client,
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn options(&self) -> &AdoClientOptions {
        &self.options
    }

    // =========================================================================
    // URL Construction
    // =========================================================================

    fn organization_url(&self) -> TrackerResult<Url> {
        let org = self.config.organization_url();
        let url = Url::parse(org).map_err(|e| TrackerError::invalid_url(org, e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(TrackerError::invalid_url(org, "not a base URL"));
        }
        Ok(url)
    }

    fn with_segments(mut url: Url, segments: &[&str]) -> TrackerResult<Url> {
        let raw = url.to_string();
        url.path_segments_mut()
            .map_err(|_| TrackerError::invalid_url(&raw, "not a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `{org}/_apis/projects/{project}?api-version=..`
    pub(crate) fn project_url(&self) -> TrackerResult<Url> {
        let mut url = Self::with_segments(
            self.organization_url()?,
            &["_apis", "projects", self.config.project_name()],
        )?;
        url.query_pairs_mut()
            .append_pair("api-version", &self.options.projects_api_version);
        Ok(url)
    }

    /// `{org}/{project}/_apis/wit/workitems/${kind}?api-version=..`
    pub(crate) fn create_url(&self, kind: WorkItemKind) -> TrackerResult<Url> {
        let type_segment = format!("${}", kind.as_str());
        let mut url = Self::with_segments(
            self.organization_url()?,
            &[
                self.config.project_name(),
                "_apis",
                "wit",
                "workitems",
                &type_segment,
            ],
        )?;
        url.query_pairs_mut()
            .append_pair("api-version", &self.options.api_version);
        Ok(url)
    }

    /// `{itemUrl}?api-version=..`
    pub(crate) fn item_url(&self, item_url: &str) -> TrackerResult<Url> {
        let mut url =
            Url::parse(item_url).map_err(|e| TrackerError::invalid_url(item_url, e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("api-version", &self.options.api_version);
        Ok(url)
    }

    // =========================================================================
    // Request Execution
    // =========================================================================

    /// Build a request with the basic auth header
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        debug!("{method} {url}");
        self.client
            .request(method, url)
            .basic_auth("", Some(self.config.access_token()))
    }

    fn patch_request(
        &self,
        method: Method,
        url: Url,
        document: &PatchDocument,
    ) -> reqwest::RequestBuilder {
        self.request(method, url)
            .header(CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
            .json(document)
    }

    /// Send and separate transport failures from API failures.
    ///
    /// Returns the response on success, or the status with best-effort
    /// details on a non-success status.
    async fn send(
        &self,
        req: reqwest::RequestBuilder,
    ) -> TrackerResult<std::result::Result<Response, (StatusCode, String)>> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(Ok(response));
        }

        let details = Self::error_details(status, response).await;
        debug!("Request failed with status {}: {}", status.as_u16(), details);
        Ok(Err((status, details)))
    }

    /// Human message from an error body.
    ///
    /// Prefers the JSON `message` field, then the whole JSON body, then the
    /// status line when the body is not JSON.
    async fn error_details(status: StatusCode, response: Response) -> String {
        let fallback = format!(
            "Request failed with status {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        )
        .trim_end()
        .to_string();

        match response.json::<Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map(String::from)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => fallback,
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Verify the organization URL, project and token resolve to a project.
    ///
    /// Returns the project's display name.
    pub async fn test_connection(&self) -> TrackerResult<String> {
        let req = self.request(Method::GET, self.project_url()?);

        match self.send(req).await? {
            Ok(response) => {
                let project: ProjectInfo = response.json().await?;
                Ok(project.name)
            }
            Err((status, details)) => Err(TrackerError::connection(status.as_u16(), details)),
        }
    }

    /// Create a single work item of `kind`.
    pub async fn create_work_item(
        &self,
        kind: WorkItemKind,
        title: &str,
        details: &WorkItemDetails,
    ) -> TrackerResult<RemoteWorkItem> {
        let document = PatchDocument::new_work_item(title, details);
        let req = self.patch_request(Method::POST, self.create_url(kind)?, &document);

        match self.send(req).await? {
            Ok(response) => {
                let created: CreatedWorkItem = response.json().await?;
                debug!("Created {kind} #{}", created.id);
                Ok(RemoteWorkItem::new(created.id, created.url))
            }
            Err((status, details)) => Err(TrackerError::create(kind, status.as_u16(), details)),
        }
    }

    /// Add one relation of `relation` kind from `from_url` to `to_url`.
    pub async fn add_relation(
        &self,
        relation: RelationKind,
        from_url: &str,
        to_url: &str,
    ) -> TrackerResult<()> {
        let document = PatchDocument::add_relation(relation, to_url);
        let req = self.patch_request(Method::PATCH, self.item_url(from_url)?, &document);

        match self.send(req).await? {
            Ok(_) => Ok(()),
            Err((status, details)) => {
                let target = match relation {
                    RelationKind::Parent => to_url,
                    RelationKind::Dependency => from_url,
                };
                Err(TrackerError::link(relation, target, status.as_u16(), details))
            }
        }
    }

    /// Link `child_url` under `parent_url`.
    pub async fn link_parent(&self, child_url: &str, parent_url: &str) -> TrackerResult<()> {
        self.add_relation(RelationKind::Parent, child_url, parent_url)
            .await
    }

    /// Record that `from_url` depends on `to_url`.
    pub async fn link_dependency(&self, from_url: &str, to_url: &str) -> TrackerResult<()> {
        self.add_relation(RelationKind::Dependency, from_url, to_url)
            .await
    }
}
