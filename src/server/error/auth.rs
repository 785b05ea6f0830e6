use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request is missing a bearer token")]
    MissingToken,
    #[error("Identity token failed verification: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Email {email:?} is outside the allowed domain @{domain}")]
    EmailDomainNotAllowed { email: String, domain: String },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::EmailDomainNotAllowed { ref domain, .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    format!("Access restricted to @{} email addresses", domain),
                )
            }
        }
    }
}
