use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{Office, SignupMode};

/// Validated, writable event fields.
///
/// Produced from a create request or by merging an update request into a stored event.
/// `starts_at` is UTC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventFields {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub office: Office,
    pub starts_at: NaiveDateTime,
    pub capacity: Option<i32>,
    pub signup_mode: SignupMode,
    pub external_url: Option<String>,
    pub is_public: bool,
}

impl From<&entity::event::Model> for EventFields {
    fn from(event: &entity::event::Model) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            office: event.office,
            starts_at: event.starts_at,
            capacity: event.capacity,
            signup_mode: event.signup_mode,
            external_url: event.external_url.clone(),
            is_public: event.is_public,
        }
    }
}
