//! Service layer for business logic.
//!
//! Services coordinate repositories and own the rules of the application: identity
//! verification, lazy user provisioning, the event lifecycle, RSVP admission and comments.
//! The verified caller is always passed in explicitly.

pub mod auth;
pub mod comment;
pub mod event;
pub mod rsvp;
pub mod user;
