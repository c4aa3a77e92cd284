//! Errors surfaced as storybook pages.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use ui::ParseOptionError;

use crate::layout;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("no story named `{0}`")]
    NotFound(String),

    #[error(transparent)]
    InvalidOption(#[from] ParseOptionError),

    #[error("invalid query string: {0}")]
    InvalidQuery(String),
}

impl ResponseError for StoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoryError::NotFound(_) => StatusCode::NOT_FOUND,
            StoryError::InvalidOption(_) | StoryError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        tracing::warn!(%status, error = %self, "story request failed");
        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(layout::error_page(status, &self.to_string()).into_string())
    }
}
