use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] folio_store::StoreError),

    #[error("auth error: {0}")]
    Auth(#[from] folio_auth::AuthError),

    #[error("name error: {0}")]
    Name(#[from] folio_types::NameError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that escape a handler are infrastructure failures (unreadable
/// directory, malformed credential file). Expected outcomes -- missing
/// documents, bad names, rejected sign-ins -- are turned into redirects or
/// 422 pages inside the handlers and never reach this point.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
