use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::RsvpStatus;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct RsvpRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RsvpRepository<'a, C> {
    /// Creates a new instance of [`RsvpRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Option<entity::rsvp::Model>, DbErr> {
        entity::prelude::Rsvp::find_by_id((user_id, event_id))
            .one(self.db)
            .await
    }

    /// Insert the RSVP for a (user, event) pair or overwrite the status of the existing one
    ///
    /// An existing row keeps its original `created_at`.
    pub async fn upsert(
        &self,
        user_id: i32,
        event_id: i32,
        status: RsvpStatus,
    ) -> Result<entity::rsvp::Model, DbErr> {
        let rsvp = entity::rsvp::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_id: ActiveValue::Set(event_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::Rsvp::insert(rsvp)
            .on_conflict(
                OnConflict::columns([
                    entity::rsvp::Column::UserId,
                    entity::rsvp::Column::EventId,
                ])
                .update_column(entity::rsvp::Column::Status)
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        rsvp: entity::rsvp::Model,
        status: RsvpStatus,
    ) -> Result<entity::rsvp::Model, DbErr> {
        let mut rsvp_am = rsvp.into_active_model();
        rsvp_am.status = ActiveValue::Set(status);

        rsvp_am.update(self.db).await
    }

    /// Count RSVPs for an event with exactly the provided status
    ///
    /// # Arguments
    /// - `excluding_user_id`: Leave this user's own row out of the count
    pub async fn count_by_status(
        &self,
        event_id: i32,
        status: RsvpStatus,
        excluding_user_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Rsvp::find()
            .filter(entity::rsvp::Column::EventId.eq(event_id))
            .filter(entity::rsvp::Column::Status.eq(status));

        if let Some(user_id) = excluding_user_id {
            query = query.filter(entity::rsvp::Column::UserId.ne(user_id));
        }

        query.count(self.db).await
    }

    /// Count going RSVPs per event in one grouped query
    ///
    /// Events without any going RSVP are absent from the map.
    pub async fn count_going_by_event(&self, event_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts = entity::prelude::Rsvp::find()
            .select_only()
            .column(entity::rsvp::Column::EventId)
            .column_as(entity::rsvp::Column::UserId.count(), "going_count")
            .filter(entity::rsvp::Column::EventId.is_in(event_ids.iter().copied()))
            .filter(entity::rsvp::Column::Status.eq(RsvpStatus::Going))
            .group_by(entity::rsvp::Column::EventId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(event_id, count)| (event_id, count as u64))
            .collect())
    }

    /// Get the earliest `limit` going RSVPs of an event with their users
    pub async fn get_going_preview(
        &self,
        event_id: i32,
        limit: u64,
    ) -> Result<Vec<(entity::rsvp::Model, entity::user::Model)>, DbErr> {
        let rows = entity::prelude::Rsvp::find()
            .filter(entity::rsvp::Column::EventId.eq(event_id))
            .filter(entity::rsvp::Column::Status.eq(RsvpStatus::Going))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::rsvp::Column::CreatedAt)
            .order_by_asc(entity::rsvp::Column::UserId)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(rsvp, user)| user.map(|user| (rsvp, user)))
            .collect())
    }

    /// Get the going and waitlisted RSVPs of the provided events with their users
    ///
    /// Ordered by event, then by registration time so the earliest registrations come first.
    /// Cancelled RSVPs are not returned.
    pub async fn get_active_with_users(
        &self,
        event_ids: &[i32],
    ) -> Result<Vec<(entity::rsvp::Model, entity::user::Model)>, DbErr> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Rsvp::find()
            .filter(entity::rsvp::Column::EventId.is_in(event_ids.iter().copied()))
            .filter(entity::rsvp::Column::Status.ne(RsvpStatus::Cancelled))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::rsvp::Column::EventId)
            .order_by_asc(entity::rsvp::Column::CreatedAt)
            .order_by_asc(entity::rsvp::Column::UserId)
            .all(self.db)
            .await?;

        // The foreign key guarantees the user, a missing one would be skipped rather than fail
        Ok(rows
            .into_iter()
            .filter_map(|(rsvp, user)| user.map(|user| (rsvp, user)))
            .collect())
    }

    /// Get the provided user's RSVPs among the provided events, in any status
    pub async fn get_for_user(
        &self,
        user_id: i32,
        event_ids: &[i32],
    ) -> Result<Vec<entity::rsvp::Model>, DbErr> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Rsvp::find()
            .filter(entity::rsvp::Column::UserId.eq(user_id))
            .filter(entity::rsvp::Column::EventId.is_in(event_ids.iter().copied()))
            .all(self.db)
            .await
    }
}
