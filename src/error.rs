use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Celestial object not found")]
    ObjectNotFound,

    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            // Not-found responses carry no body
            ServerError::ObjectNotFound => StatusCode::NOT_FOUND.into_response(),
            ServerError::Db(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
