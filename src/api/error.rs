use axum::{
    http::StatusCode,
    response::{IntoResponse, Response}
};
use log::debug;

/// Failures the user API reports to its callers.
#[derive(Debug, PartialEq)]
pub enum ServerError {
    /// No route for this path, or no handler for the method on it.
    NotFound(String)
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(path) => {
                debug!("no route for {}", path);
                (StatusCode::NOT_FOUND, format!("Resource not found: {}", path)).into_response()
            }
        }
    }
}
