use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::RsvpStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn rsvp(&self) -> RsvpFixtures<'_> {
        RsvpFixtures { context: self }
    }
}

pub struct RsvpFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> RsvpFixtures<'a> {
    pub async fn insert_rsvp(
        &self,
        user_id: i32,
        event_id: i32,
        status: RsvpStatus,
    ) -> Result<entity::rsvp::Model, TestError> {
        self.insert_rsvp_at(user_id, event_id, status, Utc::now().naive_utc())
            .await
    }

    pub async fn insert_rsvp_at(
        &self,
        user_id: i32,
        event_id: i32,
        status: RsvpStatus,
        created_at: NaiveDateTime,
    ) -> Result<entity::rsvp::Model, TestError> {
        Ok(entity::prelude::Rsvp::insert(entity::rsvp::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_id: ActiveValue::Set(event_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(created_at),
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
