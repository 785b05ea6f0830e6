//! RSVP admission service.
//!
//! Registration decides between going and waitlist against the event's capacity inside a
//! single transaction holding the event row, so concurrent registrations near the capacity
//! boundary are serialized instead of both being admitted. Cancellation never promotes
//! waitlisted users.

pub mod admission;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::{EventStatus, RsvpStatus, SignupMode};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::event::AttendeeDto,
    server::{
        data::{event::EventRepository, rsvp::RsvpRepository},
        error::{event::EventError, Error},
        model::{auth::Identity, db::RsvpModel},
        service::user::UserService,
    },
};

/// Going and waitlisted attendees of an event in registration order.
#[derive(Debug, Default)]
pub struct AttendeeSummary {
    pub going: Vec<AttendeeDto>,
    pub waitlist: Vec<AttendeeDto>,
    /// The caller's RSVP status, including cancelled, if they ever registered
    pub caller_status: Option<RsvpStatus>,
}

pub struct RsvpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsvpService<'a> {
    /// Creates a new instance of RsvpService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register the caller for an event.
    ///
    /// Provisions the caller's local user if needed, then within one transaction locks the
    /// event row, counts the other going RSVPs and writes the caller's RSVP. Registering again
    /// re-evaluates admission but keeps the original registration time; a caller who is
    /// already going stays going because their own row is not counted.
    ///
    /// # Returns
    /// - `Ok(RsvpModel)` - The caller's RSVP, going or waitlist
    /// - `Err(EventError::NotFound)` - No event with this ID
    /// - `Err(EventError::Cancelled)` - The event is cancelled
    /// - `Err(EventError::ExternalSignup)` - The event takes signups elsewhere, nothing is written
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction is rolled back
    pub async fn register(&self, identity: &Identity, event_id: i32) -> Result<RsvpModel, Error> {
        let user = UserService::new(self.db).get_or_create(identity).await?;

        let txn = self.db.begin().await?;

        let event = EventRepository::new(&txn)
            .get_by_id_for_update(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        if event.status == EventStatus::Cancelled {
            return Err(EventError::Cancelled(event_id).into());
        }

        if event.signup_mode == SignupMode::External {
            return Err(EventError::ExternalSignup {
                event_id,
                external_url: event.external_url.unwrap_or_default(),
            }
            .into());
        }

        let rsvp_repo = RsvpRepository::new(&txn);

        let going_count = match event.capacity {
            Some(_) => {
                rsvp_repo
                    .count_by_status(event_id, RsvpStatus::Going, Some(user.id))
                    .await?
            }
            None => 0,
        };
        let status = admission::admit(event.capacity, going_count);

        let rsvp = rsvp_repo.upsert(user.id, event_id, status).await?;

        txn.commit().await?;

        tracing::info!(
            event_id,
            user_id = user.id,
            status = ?rsvp.status,
            going_count,
            capacity = ?event.capacity,
            "Registered for event"
        );

        Ok(rsvp)
    }

    /// Cancel the caller's RSVP for an event.
    ///
    /// Idempotent: a caller with no local user or no RSVP gets `Ok(None)` and nothing is
    /// written. Cancelled events still accept cancellations. Waitlisted users are never
    /// promoted into the freed slot.
    ///
    /// # Returns
    /// - `Ok(Some(RsvpModel))` - The caller's RSVP, now cancelled
    /// - `Ok(None)` - The caller had nothing to cancel
    /// - `Err(EventError::NotFound)` - No event with this ID
    pub async fn cancel(
        &self,
        identity: &Identity,
        event_id: i32,
    ) -> Result<Option<RsvpModel>, Error> {
        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        let Some(user) = UserService::new(self.db).find(identity).await? else {
            return Ok(None);
        };

        let rsvp_repo = RsvpRepository::new(self.db);

        let Some(rsvp) = rsvp_repo.get(user.id, event_id).await? else {
            return Ok(None);
        };

        if rsvp.status == RsvpStatus::Cancelled {
            return Ok(Some(rsvp));
        }

        let previous = rsvp.status;
        let rsvp = rsvp_repo.set_status(rsvp, RsvpStatus::Cancelled).await?;

        tracing::info!(
            event_id,
            user_id = user.id,
            previous = ?previous,
            "Cancelled registration"
        );

        Ok(Some(rsvp))
    }

    /// Summarize an event's attendees.
    ///
    /// Read-only. Empty lists for an event nobody registered for.
    pub async fn attendee_summary(
        &self,
        event_id: i32,
        caller_user_id: Option<i32>,
    ) -> Result<AttendeeSummary, Error> {
        let mut summary = AttendeeSummary::default();

        let rows = RsvpRepository::new(self.db)
            .get_active_with_users(&[event_id])
            .await?;

        for (rsvp, user) in rows {
            match rsvp.status {
                RsvpStatus::Going => summary.going.push(AttendeeDto::new(&rsvp, user)),
                RsvpStatus::Waitlist => summary.waitlist.push(AttendeeDto::new(&rsvp, user)),
                RsvpStatus::Cancelled => {}
            }
        }

        if let Some(user_id) = caller_user_id {
            summary.caller_status = RsvpRepository::new(self.db)
                .get(user_id, event_id)
                .await?
                .map(|rsvp| rsvp.status);
        }

        Ok(summary)
    }
}
