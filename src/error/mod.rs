mod types;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub use types::ErrorBody;

use crate::api::types::MessageResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid params - {0}")]
    InvalidParams(String),

    #[error("Database error - {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("IO error - {0}")]
    IoError(#[from] std::io::Error),

    #[error("TryInitError - {0}")]
    TryInitError(#[from] tracing_subscriber::util::TryInitError),

    #[error("User not found")]
    UserNotFound,

    #[error("Character not found")]
    CharacterNotFound,

    #[error("Planet not found")]
    PlanetNotFound,

    /// Favorites keep their own `{"msg":"ko"}` failure envelope.
    #[error("Favorite rejected")]
    FavoriteRejected,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParams(_) | Self::FavoriteRejected => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::CharacterNotFound | Self::PlanetNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::DatabaseError(_) | Self::IoError(_) | Self::TryInitError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn user_safe_format(&self) -> ErrorBody {
        match self {
            Self::InvalidParams(msg) => ErrorBody::new("bad_request", msg.clone()),
            Self::DatabaseError(error) => {
                tracing::error!(error = %error, "Database error");

                ErrorBody::new(
                    "internal_error",
                    "Service temporarily unavailable. Please try again later.",
                )
            }
            Self::IoError(error) => {
                tracing::error!(error = %error, "IO error");

                ErrorBody::new("internal_error", "Internal server error")
            }
            Self::TryInitError(error) => {
                tracing::error!(error = %error, "TryInitError");

                ErrorBody::new("internal_error", "Internal server error")
            }
            Self::UserNotFound | Self::CharacterNotFound | Self::PlanetNotFound => {
                ErrorBody::new("not_found", self.to_string())
            }
            Self::FavoriteRejected => ErrorBody::new("bad_request", self.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidParams(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidParams(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::FavoriteRejected => serde_json::to_string(&MessageResponse::ko()),
            _ => serde_json::to_string(&self.user_safe_format()),
        }
        .unwrap_or_else(|_| {
            r#"{"code":"internal_error","message":"Internal server error"}"#.to_string()
        });

        (status, [("content-type", "application/json")], body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_map_to_not_found() {
        assert_eq!(AppError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::CharacterNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::PlanetNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_errors_hide_details() {
        let error = AppError::DatabaseError(sea_orm::DbErr::Custom("relation missing".into()));
        let body = error.user_safe_format();

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "internal_error");
        assert!(!body.message.contains("relation missing"));
    }

    #[test]
    fn favorite_rejection_is_bad_request() {
        let response = AppError::FavoriteRejected.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
