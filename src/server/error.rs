use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::error::ContactError;
use crate::server::views;

/// Handler error, rendered as an HTML error page.
#[derive(Debug)]
pub struct AppError(pub ContactError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            ContactError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Html(views::not_found())).into_response()
            }
            ContactError::Storage(err) => {
                error!(error = %err, "Contact store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error())).into_response()
            }
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        AppError(err)
    }
}
