use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::database::ActivityStore;
use crate::errors::ActivityError;
use crate::models::ActivityMap;
use crate::services::activities_service;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    fn require_email(self) -> Result<String, ActivityError> {
        self.email.ok_or(ActivityError::MissingEmail)
    }
}

// Extractor failures become `ActivityError`, so every 400 carries a JSON `detail`.
fn decode_request(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<(String, String), ActivityError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    Ok((activity_name, query.require_email()?))
}

fn rejected(action: &str, e: ActivityError) -> ActivityError {
    warn!("{} request rejected: {}", action, e);
    e
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, ActivityError> {
    let (activity_name, email) =
        decode_request(path, query).map_err(|e| rejected("Signup", e))?;

    match activities_service::signup_for_activity(&store, &activity_name, &email).await {
        Ok(message) => Ok(Json(serde_json::json!({ "message": message }))),
        Err(e) => {
            warn!(%email, "Signup for {} rejected: {}", activity_name, e);
            Err(e)
        }
    }
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, ActivityError> {
    let (activity_name, email) =
        decode_request(path, query).map_err(|e| rejected("Unregister", e))?;

    match activities_service::unregister_from_activity(&store, &activity_name, &email).await {
        Ok(message) => Ok(Json(serde_json::json!({ "message": message }))),
        Err(e) => {
            warn!(%email, "Unregister from {} rejected: {}", activity_name, e);
            Err(e)
        }
    }
}
