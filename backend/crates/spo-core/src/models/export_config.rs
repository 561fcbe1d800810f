use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;

/// Connection triple for the remote tracker.
///
/// Treated as an opaque capability: it is read-only for the duration of an
/// export and never serialized. `Debug` redacts the token.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportConfig {
    organization_url: String,
    project_name: String,
    access_token: String,
}

impl ExportConfig {
    /// Build a config, rejecting blank members.
    ///
    /// A trailing `/` on the organization URL is stripped.
    #[track_caller]
    pub fn new(
        organization_url: impl Into<String>,
        project_name: impl Into<String>,
        access_token: impl Into<String>,
    ) -> CoreResult<Self> {
        let organization_url = organization_url.into();
        let project_name = project_name.into();
        let access_token = access_token.into();

        for (field, value) in [
            ("organization_url", &organization_url),
            ("project_name", &project_name),
            ("access_token", &access_token),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation {
                    message: format!("{field} must not be empty"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(Self {
            organization_url: organization_url.trim().trim_end_matches('/').to_string(),
            project_name: project_name.trim().to_string(),
            access_token,
        })
    }

    pub fn organization_url(&self) -> &str {
        &self.organization_url
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("organization_url", &self.organization_url)
            .field("project_name", &self.project_name)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
