use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Infrastructure failures that end a request with a 500 page.
///
/// User mistakes (bad form input, wrong password, missing upload) never reach this type;
/// they are reported through flash messages instead.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("session unavailable: {0}")]
    SessionMissing(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(error = %self, %status, "request failed");

        let body = Html(format!(
            "<!DOCTYPE html><html><head><title>Smart Krishi</title></head>\
             <body><h1>{}</h1><p>Something went wrong. Please try again.</p>\
             <p><a href=\"/\">Home</a></p></body></html>",
            status
        ));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_map_to_500() {
        let resp = AppError::Other(anyhow::anyhow!("boom")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_session_layer_is_internal() {
        let resp = AppError::SessionMissing("no layer").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
