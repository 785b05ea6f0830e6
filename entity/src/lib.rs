//! SeaORM entities for the huddle database.

pub mod prelude;

pub mod comment;
pub mod event;
pub mod rsvp;
pub mod sea_orm_active_enums;
pub mod user;
