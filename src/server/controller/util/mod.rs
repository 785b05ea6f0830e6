//! Shared request handling for controllers.
//!
//! - `auth` - bearer token extractor resolving the verified caller
//! - `extract` - mapping of axum extractor rejections to validation errors

pub mod auth;
pub mod extract;
