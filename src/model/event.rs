use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{EventStatus, Office, RsvpStatus, SignupMode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::double_option;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub office: Office,
    pub starts_at: DateTime<Utc>,
    /// Maximum number of going attendees, `null` for unlimited
    pub capacity: Option<i32>,
    pub signup_mode: SignupMode,
    pub external_url: Option<String>,
    pub is_public: bool,
    pub status: EventStatus,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            office: event.office,
            starts_at: event.starts_at.and_utc(),
            capacity: event.capacity,
            signup_mode: event.signup_mode,
            external_url: event.external_url,
            is_public: event.is_public,
            status: event.status,
            created_by: event.created_by,
            created_at: event.created_at.and_utc(),
        }
    }
}

/// A user holding an RSVP for an event
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeDto {
    pub user_id: i32,
    pub name: Option<String>,
    pub email: String,
    pub avatar_url: Option<String>,
    pub status: RsvpStatus,
    /// When the user first registered
    pub registered_at: DateTime<Utc>,
}

impl AttendeeDto {
    pub fn new(rsvp: &entity::rsvp::Model, user: entity::user::Model) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            status: rsvp.status,
            registered_at: rsvp.created_at.and_utc(),
        }
    }
}

/// Event as shown in listings, with the caller's registration and an attendee preview
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryDto {
    #[serde(flatten)]
    pub event: EventDto,
    pub going_count: u64,
    pub is_registered: bool,
    pub rsvp_status: Option<RsvpStatus>,
    /// First few going attendees in registration order
    pub attendees: Vec<AttendeeDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventListResponse {
    pub events: Vec<EventSummaryDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailDto {
    pub event: EventDto,
    pub going_count: u64,
    pub waitlist_count: u64,
    pub attendees: Vec<AttendeeDto>,
    pub waitlist: Vec<AttendeeDto>,
    pub is_creator: bool,
    pub is_registered: bool,
    pub rsvp_status: Option<RsvpStatus>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event: EventDto,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EventListQuery {
    /// Office code to filter by
    pub office: Option<String>,
    /// Include cancelled events, defaults to false
    pub include_cancelled: Option<bool>,
}

/// Request body for creating an event.
///
/// Enum-like fields arrive as strings so unknown values can be reported with a
/// useful message instead of a generic deserialization error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub office: Option<String>,
    /// RFC 3339 timestamp, or `YYYY-MM-DDTHH:MM[:SS]` interpreted as UTC
    pub starts_at: Option<String>,
    pub capacity: Option<i32>,
    pub signup_mode: Option<String>,
    pub external_url: Option<String>,
    pub is_public: Option<bool>,
}

/// Request body for a partial event update.
///
/// Absent fields keep their stored value, `null` clears an optional field.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEventDto {
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub office: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub starts_at: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub capacity: Option<Option<i32>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub signup_mode: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub external_url: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    #[schema(value_type = Option<bool>)]
    pub is_public: Option<Option<bool>>,
}
