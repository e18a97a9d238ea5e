use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::quote::QuoteError;
use crate::templates::ApologyTemplate;
use crate::trade::TradeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    // One message for unknown username and wrong password alike.
    #[error("invalid username and/or password")]
    InvalidCredentials,

    #[error("username already exists")]
    UserExists,

    #[error("not a valid stock symbol")]
    UnknownSymbol,

    #[error("stock not found")]
    QuoteNotFound,

    #[error(transparent)]
    Trade(#[from] TradeError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::InvalidCredentials
            | AppError::UserExists
            | AppError::UnknownSymbol
            | AppError::Trade(_) => StatusCode::FORBIDDEN,
            AppError::QuoteNotFound => StatusCode::NOT_FOUND,
            AppError::Quote(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_)
            | AppError::Session(_)
            | AppError::Template(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Client-caused failures carry their own message; everything else is
        // logged server-side and masked.
        let message = match &self {
            AppError::Quote(err) => {
                tracing::warn!(error = %err, "quote lookup failed");
                "quote service unavailable".to_string()
            }
            _ if status.is_server_error() => {
                tracing::error!(error = %self, "request failed");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        let page = ApologyTemplate {
            code: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, "internal server error").into_response(),
        }
    }
}
