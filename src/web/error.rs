use axum::{extract::rejection::QueryRejection, http::StatusCode, Json};

use crate::error::SignupError;
use crate::models::DetailBody;

pub type ApiError = (StatusCode, Json<DetailBody>);

pub fn status_for(err: &SignupError) -> StatusCode {
    match err {
        SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
        SignupError::AlreadyRegistered => StatusCode::BAD_REQUEST,
        SignupError::NotRegistered => StatusCode::NOT_FOUND,
    }
}

impl From<SignupError> for DetailBody {
    fn from(err: SignupError) -> Self {
        DetailBody::new(err.to_string())
    }
}

pub fn signup_error(err: SignupError) -> ApiError {
    (status_for(&err), Json(err.into()))
}

// A missing or unreadable `email` parameter is a validation failure, not a bad request.
pub fn invalid_query(rejection: QueryRejection) -> ApiError {
    tracing::warn!(error = %rejection.body_text(), "invalid query string");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(DetailBody::new(rejection.body_text())),
    )
}

pub async fn not_found_handler() -> ApiError {
    (StatusCode::NOT_FOUND, Json(DetailBody::new("Not Found")))
}
