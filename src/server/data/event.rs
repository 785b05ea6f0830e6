use chrono::Utc;
use entity::sea_orm_active_enums::{EventStatus, Office};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::event::EventFields;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a new active event owned by `created_by`
    pub async fn create(
        &self,
        created_by: i32,
        fields: EventFields,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            location: ActiveValue::Set(fields.location),
            office: ActiveValue::Set(fields.office),
            starts_at: ActiveValue::Set(fields.starts_at),
            capacity: ActiveValue::Set(fields.capacity),
            signup_mode: ActiveValue::Set(fields.signup_mode),
            external_url: ActiveValue::Set(fields.external_url),
            is_public: ActiveValue::Set(fields.is_public),
            status: ActiveValue::Set(EventStatus::Active),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await
    }

    /// Get an event while holding an exclusive lock on its row
    ///
    /// Intended to be called on a transaction, the lock is held until it commits. Backends
    /// without row locks (SQLite) run the plain select and rely on their own writer lock.
    pub async fn get_by_id_for_update(
        &self,
        event_id: i32,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        select_for_update(event_id).one(self.db).await
    }

    /// List events ordered by start time, optionally restricted to one office
    ///
    /// Cancelled events are left out unless `include_cancelled` is set.
    pub async fn list(
        &self,
        office: Option<Office>,
        include_cancelled: bool,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(office) = office {
            query = query.filter(entity::event::Column::Office.eq(office));
        }

        if !include_cancelled {
            query = query.filter(entity::event::Column::Status.eq(EventStatus::Active));
        }

        query
            .order_by_asc(entity::event::Column::StartsAt)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrite every writable field of an event
    pub async fn update(
        &self,
        event: entity::event::Model,
        fields: EventFields,
    ) -> Result<entity::event::Model, DbErr> {
        let mut event_am = event.into_active_model();
        event_am.title = ActiveValue::Set(fields.title);
        event_am.description = ActiveValue::Set(fields.description);
        event_am.location = ActiveValue::Set(fields.location);
        event_am.office = ActiveValue::Set(fields.office);
        event_am.starts_at = ActiveValue::Set(fields.starts_at);
        event_am.capacity = ActiveValue::Set(fields.capacity);
        event_am.signup_mode = ActiveValue::Set(fields.signup_mode);
        event_am.external_url = ActiveValue::Set(fields.external_url);
        event_am.is_public = ActiveValue::Set(fields.is_public);

        event_am.update(self.db).await
    }

    pub async fn set_status(
        &self,
        event: entity::event::Model,
        status: EventStatus,
    ) -> Result<entity::event::Model, DbErr> {
        let mut event_am = event.into_active_model();
        event_am.status = ActiveValue::Set(status);

        event_am.update(self.db).await
    }
}

/// `SELECT ... FOR UPDATE` on Postgres, a plain select on SQLite
fn select_for_update(event_id: i32) -> Select<entity::event::Entity> {
    entity::prelude::Event::find_by_id(event_id).lock_exclusive()
}
