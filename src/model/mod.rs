//! Data transfer objects shared by the HTTP API.
//!
//! Every type here serializes with camelCase field names.

pub mod api;
pub mod comment;
pub mod event;
pub mod rsvp;
pub mod user;
