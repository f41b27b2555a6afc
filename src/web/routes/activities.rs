use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityRegistry;
use crate::models::{ActivityCatalog, MessageBody};
use crate::services::activities_service;
use crate::web::error::{self, ApiError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Student email; stored as given, no format check.
    pub email: String,
}

pub async fn list_activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<ActivityCatalog> {
    Json(activities_service::list_activities(&registry).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(registry): State<ActivityRegistry>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Query(query) = query.map_err(error::invalid_query)?;

    activities_service::sign_up(&registry, &activity_name, &query.email)
        .await
        .map(Json)
        .map_err(error::signup_error)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(registry): State<ActivityRegistry>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Query(query) = query.map_err(error::invalid_query)?;

    activities_service::unregister(&registry, &activity_name, &query.email)
        .await
        .map(Json)
        .map_err(error::signup_error)
}
