//! Helpers turning axum extractor rejections into [`ValidationError`]s.
//!
//! Handlers take `Result<Path<_>, PathRejection>` and friends and pass them through these
//! functions so bad input is reported in the API's `{ error }` shape instead of axum's
//! plain-text rejections.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use crate::server::error::validation::ValidationError;

/// Read a numeric id from the path.
pub fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ValidationError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!("Rejected path id: {}", rejection.body_text());

            Err(ValidationError::InvalidId)
        }
    }
}

pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    body.map(|Json(body)| body)
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))
}

pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ValidationError> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| ValidationError::MalformedQuery(rejection.body_text()))
}
