//! Event lifecycle service.
//!
//! Creation, partial updates and soft cancellation of events, plus the listing and detail
//! views that combine events with RSVP state for the calling user.

pub mod input;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use entity::sea_orm_active_enums::{EventStatus, Office, RsvpStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::event::{AttendeeDto, CreateEventDto, EventDetailDto, EventSummaryDto, UpdateEventDto},
    server::{
        data::{event::EventRepository, rsvp::RsvpRepository},
        error::{event::EventError, Error},
        model::{auth::Identity, db::EventModel},
        service::{rsvp::RsvpService, user::UserService},
    },
};

/// Number of going attendees shown with each event in listings.
pub const ATTENDEE_PREVIEW_LEN: usize = 4;

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of EventService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an event owned by the caller.
    ///
    /// The request is validated before anything is written, so a rejected request neither
    /// provisions a user nor stores an event.
    ///
    /// # Returns
    /// - `Ok(EventModel)` - The stored event, status active
    /// - `Err(Error::ValidationError)` - Missing or invalid fields
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        identity: &Identity,
        dto: CreateEventDto,
    ) -> Result<EventModel, Error> {
        let fields = input::fields_from_create(dto)?;

        let user = UserService::new(self.db).get_or_create(identity).await?;
        let event = EventRepository::new(self.db).create(user.id, fields).await?;

        tracing::info!(event_id = event.id, user_id = user.id, "Created event");

        Ok(event)
    }

    /// Apply a partial update to an event the caller created.
    ///
    /// # Returns
    /// - `Ok(EventModel)` - The updated event
    /// - `Err(EventError::NotFound)` - No event with this ID
    /// - `Err(EventError::NotCreator)` - The caller did not create the event
    /// - `Err(EventError::Cancelled)` - Cancelled events are read-only
    /// - `Err(Error::ValidationError)` - The merged event is invalid
    pub async fn update(
        &self,
        identity: &Identity,
        event_id: i32,
        dto: UpdateEventDto,
    ) -> Result<EventModel, Error> {
        let event = self.get_owned(identity, event_id).await?;

        if event.status == EventStatus::Cancelled {
            return Err(EventError::Cancelled(event_id).into());
        }

        let fields = input::merge_update(&event, dto)?;
        let event = EventRepository::new(self.db).update(event, fields).await?;

        tracing::info!(event_id = event.id, "Updated event");

        Ok(event)
    }

    /// Soft-cancel an event the caller created; cancelling twice is a no-op.
    ///
    /// Existing RSVPs are kept as they are.
    pub async fn cancel(&self, identity: &Identity, event_id: i32) -> Result<EventModel, Error> {
        let event = self.get_owned(identity, event_id).await?;

        if event.status == EventStatus::Cancelled {
            return Ok(event);
        }

        let event = EventRepository::new(self.db)
            .set_status(event, EventStatus::Cancelled)
            .await?;

        tracing::info!(event_id = event.id, "Cancelled event");

        Ok(event)
    }

    /// List events by start time with going counts, a short attendee preview and the
    /// caller's own RSVP.
    pub async fn list(
        &self,
        identity: &Identity,
        office: Option<Office>,
        include_cancelled: bool,
    ) -> Result<Vec<EventSummaryDto>, Error> {
        let events = EventRepository::new(self.db)
            .list(office, include_cancelled)
            .await?;
        let event_ids: Vec<i32> = events.iter().map(|event| event.id).collect();

        let rsvp_repo = RsvpRepository::new(self.db);

        let going_counts = rsvp_repo.count_going_by_event(&event_ids).await?;

        let mut previews: HashMap<i32, Vec<AttendeeDto>> = HashMap::new();
        for &event_id in going_counts.keys() {
            let preview = rsvp_repo
                .get_going_preview(event_id, ATTENDEE_PREVIEW_LEN as u64)
                .await?
                .into_iter()
                .map(|(rsvp, user)| AttendeeDto::new(&rsvp, user))
                .collect();
            previews.insert(event_id, preview);
        }

        let caller_status: HashMap<i32, RsvpStatus> =
            match UserService::new(self.db).find(identity).await? {
                Some(user) => rsvp_repo
                    .get_for_user(user.id, &event_ids)
                    .await?
                    .into_iter()
                    .map(|rsvp| (rsvp.event_id, rsvp.status))
                    .collect(),
                None => HashMap::new(),
            };

        let summaries = events
            .into_iter()
            .map(|event| {
                let going_count = going_counts.get(&event.id).copied().unwrap_or_default();
                let attendees = previews.remove(&event.id).unwrap_or_default();
                let rsvp_status = caller_status.get(&event.id).copied();

                EventSummaryDto {
                    event: event.into(),
                    going_count,
                    is_registered: is_registered(rsvp_status),
                    rsvp_status,
                    attendees,
                }
            })
            .collect();

        Ok(summaries)
    }

    /// Get one event with its full going and waitlist breakdown.
    ///
    /// Cancelled events stay readable.
    pub async fn get_detail(
        &self,
        identity: &Identity,
        event_id: i32,
    ) -> Result<EventDetailDto, Error> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        let caller = UserService::new(self.db).find(identity).await?;
        let summary = RsvpService::new(self.db)
            .attendee_summary(event.id, caller.as_ref().map(|user| user.id))
            .await?;

        let is_creator = caller
            .as_ref()
            .is_some_and(|user| user.id == event.created_by);

        Ok(EventDetailDto {
            event: event.into(),
            going_count: summary.going.len() as u64,
            waitlist_count: summary.waitlist.len() as u64,
            attendees: summary.going,
            waitlist: summary.waitlist,
            is_creator,
            is_registered: is_registered(summary.caller_status),
            rsvp_status: summary.caller_status,
        })
    }

    /// Fetch an event and make sure the caller created it.
    ///
    /// Callers without a local user cannot own anything, so no user is provisioned here.
    async fn get_owned(&self, identity: &Identity, event_id: i32) -> Result<EventModel, Error> {
        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        let user = UserService::new(self.db).find(identity).await?;

        match user {
            Some(user) if user.id == event.created_by => Ok(event),
            user => Err(EventError::NotCreator {
                event_id,
                user_id: user.map(|user| user.id),
            }
            .into()),
        }
    }
}

fn is_registered(status: Option<RsvpStatus>) -> bool {
    matches!(status, Some(RsvpStatus::Going | RsvpStatus::Waitlist))
}
