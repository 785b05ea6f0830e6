pub use super::comment::Entity as Comment;
pub use super::event::Entity as Event;
pub use super::rsvp::Entity as Rsvp;
pub use super::user::Entity as User;
