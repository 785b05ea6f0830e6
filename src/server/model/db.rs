//! Database model type aliases.

/// Local user, provisioned from the identity provider's email claim.
pub type UserModel = entity::user::Model;

/// Event row, see [`entity::event::Model`] for field semantics.
pub type EventModel = entity::event::Model;

/// RSVP row keyed by `(user_id, event_id)`.
pub type RsvpModel = entity::rsvp::Model;
