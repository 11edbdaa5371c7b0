use std::path::PathBuf;

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Rejections from the signup / unregister rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Missing required query parameter: email")]
    MissingEmail,

    /// Path or query string the extractors could not decode.
    #[error("{0}")]
    InvalidRequest(String),
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp
            | ActivityError::NotRegistered
            | ActivityError::ActivityFull
            | ActivityError::MissingEmail
            | ActivityError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<PathRejection> for ActivityError {
    fn from(rejection: PathRejection) -> Self {
        ActivityError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ActivityError {
    fn from(rejection: QueryRejection) -> Self {
        ActivityError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid seed data for {activity}: {reason}")]
    InvalidSeed { activity: String, reason: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
