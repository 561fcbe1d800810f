use crate::RelationKind;

use spo_core::WorkItemKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub(crate) const NETWORK_ADVICE: &str = "A network error occurred, preventing connection to Azure DevOps.\n\n\
This is most likely a CORS policy or connectivity issue. When the request originates \
from a browser, an administrator can allow the origin under \
'Organization Settings > Policies > CORS'.\n\n\
Other potential causes:\n\
1. Incorrect Organization URL.\n\
2. Network/VPN issue preventing access to dev.azure.com.\n\
3. A proxy, firewall or browser extension is blocking the request.";

/// Errors raised by the work item client.
///
/// `Network` means the host was never reached and points at connectivity;
/// the status-carrying variants mean the API answered with a non-success
/// status and point at credentials or configuration.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{advice}\n\nDetails: {message} {location}", advice = NETWORK_ADVICE)]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "Connection test failed (Status: {status}): {details}. Please check your access token and project name. {location}"
    )]
    Connection {
        status: u16,
        details: String,
        location: ErrorLocation,
    },

    #[error("Failed to create {kind} in Azure DevOps (Status: {status}): {details} {location}")]
    Create {
        kind: WorkItemKind,
        status: u16,
        details: String,
        location: ErrorLocation,
    },

    #[error("Failed to add {relation} link to {target} (Status: {status}): {details} {location}")]
    Link {
        relation: RelationKind,
        target: String,
        status: u16,
        details: String,
        location: ErrorLocation,
    },

    #[error("Unexpected response from Azure DevOps: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to build HTTP client: {message} {location}")]
    ClientBuild {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl TrackerError {
    /// Convert a transport error, separating body decode failures from
    /// unreachable hosts.
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return TrackerError::InvalidResponse {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        TrackerError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn connection(status: u16, details: String) -> Self {
        TrackerError::Connection {
            status,
            details,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn create(kind: WorkItemKind, status: u16, details: String) -> Self {
        TrackerError::Create {
            kind,
            status,
            details,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn link(relation: RelationKind, target: &str, status: u16, details: String) -> Self {
        TrackerError::Link {
            relation,
            target: target.to_string(),
            status,
            details,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: &str, message: impl Into<String>) -> Self {
        TrackerError::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status for API-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Connection { status, .. }
            | Self::Create { status, .. }
            | Self::Link { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<reqwest::Error> for TrackerError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        TrackerError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
