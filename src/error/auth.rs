use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user stored in the session.
    ///
    /// The request reached a guarded endpoint without an established session.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// The session holds a user id, but no matching (non-deleted) user row was
    /// found. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks permission for the requested action.
    ///
    /// Results in a 403 Forbidden response carrying the provided message.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Session failures are logged at debug level and answered with a generic
/// message; access-denied errors return the specific reason so the caller can
/// tell authentication apart from authorization.
///
/// # Returns
/// - 401 Unauthorized - For missing or stale session state
/// - 403 Forbidden - For permission failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "You must be logged in to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(_, reason) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
