use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a user keyed by email, or return the existing row for that email
    ///
    /// A conflicting insert leaves the stored name and avatar untouched, so profile data
    /// is only taken from the identity provider the first time a user is seen.
    pub async fn upsert_by_email(
        &self,
        email: &str,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name),
            avatar_url: ActiveValue::Set(avatar_url),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::User::insert(user)
            .on_conflict(
                // Rewriting email with the identical value turns the conflict into a no-op
                // update, which still yields the row through RETURNING
                OnConflict::column(entity::user::Column::Email)
                    .update_column(entity::user::Column::Email)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
