use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RsvpStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RsvpDto {
    pub user_id: i32,
    pub event_id: i32,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
}

impl From<entity::rsvp::Model> for RsvpDto {
    fn from(rsvp: entity::rsvp::Model) -> Self {
        Self {
            user_id: rsvp.user_id,
            event_id: rsvp.event_id,
            status: rsvp.status,
            created_at: rsvp.created_at.and_utc(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RsvpResponse {
    pub rsvp: RsvpDto,
}

/// Cancellation result, `rsvp` is `null` when the caller had nothing to cancel
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CancelRsvpResponse {
    pub rsvp: Option<RsvpDto>,
}
