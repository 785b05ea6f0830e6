//! Server application models and type definitions.
//!
//! Application state, identity types extracted from verified tokens, and database model
//! type aliases.

pub mod app;
pub mod auth;
pub mod db;
pub mod event;
