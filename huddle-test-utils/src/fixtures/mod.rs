//! Test fixture modules.
//!
//! - `auth` - identity tokens signed with the shared test secret
//! - `comment` - comment records
//! - `event` - event records with common shapes (capacity, external, cancelled)
//! - `rsvp` - RSVP records
//! - `user` - local user records

pub mod auth;
pub mod comment;
pub mod event;
pub mod rsvp;
pub mod user;
