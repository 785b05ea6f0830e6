use chrono::{Duration, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{EventStatus, Office, SignupMode};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { context: self }
    }
}

pub struct EventFixtures<'a> {
    context: &'a TestContext,
}

/// Active model for an internal, public, active event at the default office a week from now.
pub fn mock_event_active_model(created_by: i32) -> entity::event::ActiveModel {
    let now = Utc::now().naive_utc();
    entity::event::ActiveModel {
        title: ActiveValue::Set("Team Lunch".to_string()),
        description: ActiveValue::Set(Some("Lunch at the usual place".to_string())),
        location: ActiveValue::Set(Some("Kitchen".to_string())),
        office: ActiveValue::Set(Office::Vie),
        starts_at: ActiveValue::Set(now + Duration::days(7)),
        capacity: ActiveValue::Set(None),
        signup_mode: ActiveValue::Set(SignupMode::Internal),
        external_url: ActiveValue::Set(None),
        is_public: ActiveValue::Set(true),
        status: ActiveValue::Set(EventStatus::Active),
        created_by: ActiveValue::Set(created_by),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

impl<'a> EventFixtures<'a> {
    /// Insert an internal event with the provided capacity, `None` for unlimited.
    pub async fn insert_event(
        &self,
        created_by: i32,
        capacity: Option<i32>,
    ) -> Result<entity::event::Model, TestError> {
        let mut model = mock_event_active_model(created_by);
        model.capacity = ActiveValue::Set(capacity);

        self.insert(model).await
    }

    pub async fn insert_external_event(
        &self,
        created_by: i32,
        external_url: &str,
    ) -> Result<entity::event::Model, TestError> {
        let mut model = mock_event_active_model(created_by);
        model.signup_mode = ActiveValue::Set(SignupMode::External);
        model.external_url = ActiveValue::Set(Some(external_url.to_string()));

        self.insert(model).await
    }

    pub async fn insert_cancelled_event(
        &self,
        created_by: i32,
    ) -> Result<entity::event::Model, TestError> {
        let mut model = mock_event_active_model(created_by);
        model.status = ActiveValue::Set(EventStatus::Cancelled);

        self.insert(model).await
    }

    pub async fn insert_event_at(
        &self,
        created_by: i32,
        office: Office,
        starts_at: NaiveDateTime,
    ) -> Result<entity::event::Model, TestError> {
        let mut model = mock_event_active_model(created_by);
        model.office = ActiveValue::Set(office);
        model.starts_at = ActiveValue::Set(starts_at);

        self.insert(model).await
    }

    pub async fn insert(
        &self,
        model: entity::event::ActiveModel,
    ) -> Result<entity::event::Model, TestError> {
        Ok(entity::prelude::Event::insert(model)
            .exec_with_returning(&self.context.db)
            .await?)
    }
}
