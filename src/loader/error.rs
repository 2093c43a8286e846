//! Error classification for content loaders.
//!
//! Loaders keep the structured cause while they work. At the boundary the
//! error is flattened into a `LoadEvent`: the controller only ever sees a
//! display string or the connectivity-loss signal.

use reqwest::StatusCode;
use thiserror::Error;

use crate::load::LoadEvent;

/// Errors that can occur while loading content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The HTTP client could not be built
    #[error("HTTP client setup failed: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// No route to the host: DNS, refused connection, connect timeout
    #[error("Unable to reach '{url}': {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status}")]
    Status { status: StatusCode },

    /// Request or body transfer failed after connecting
    #[error("Transfer from '{url}' failed: {source}")]
    Transfer {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failure injected by a scripted loader
    #[error("{0}")]
    Scripted(String),
}

impl LoadError {
    /// Classify a request error by whether a connection was ever made.
    pub fn from_request(url: &str, source: reqwest::Error) -> Self {
        if source.is_connect() {
            LoadError::Unreachable {
                url: url.to_string(),
                source,
            }
        } else {
            LoadError::Transfer {
                url: url.to_string(),
                source,
            }
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, LoadError::Unreachable { .. })
    }

    /// Flatten into the event reported to the controller.
    pub fn into_event(self) -> LoadEvent {
        if self.is_offline() {
            LoadEvent::ConnectionLost
        } else {
            LoadEvent::failed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_becomes_failure_text() {
        let event = LoadError::Status {
            status: StatusCode::NOT_FOUND,
        }
        .into_event();
        assert_eq!(event, LoadEvent::failed("HTTP 404 Not Found"));
    }

    #[test]
    fn scripted_message_is_verbatim() {
        let err = LoadError::Scripted("disk full".to_string());
        assert!(!err.is_offline());
        assert_eq!(err.into_event(), LoadEvent::failed("disk full"));
    }
}
