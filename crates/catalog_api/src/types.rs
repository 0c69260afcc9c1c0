use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Opaque identifier assigned to a book by the catalog service. The wire form
/// is either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Ok(BookId(text)),
            Raw::Number(number) => Ok(BookId(number.to_string())),
        }
    }
}

/// One record returned by the catalog service. Records with missing text
/// fields decode with empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publisher: String,
}

/// Payload of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publisher: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    InvalidBody,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::InvalidUrl => write!(f, "invalid url"),
            ApiFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::Network => write!(f, "network error"),
            ApiFailure::InvalidBody => write!(f, "invalid response body"),
        }
    }
}

/// Completion events reported by the background command runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    ListFinished(Result<Vec<Book>, ApiError>),
    CreateFinished(Result<Book, ApiError>),
    DeleteFinished {
        id: BookId,
        result: Result<(), ApiError>,
    },
}
