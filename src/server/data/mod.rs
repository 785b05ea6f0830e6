//! Database repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run
//! against the shared connection or inside a transaction.

pub mod comment;
pub mod event;
pub mod rsvp;
pub mod user;
