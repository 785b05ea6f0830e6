use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(Some("Test User".to_string())),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert `count` users with sequential emails (`user1@example.com`, ...).
    pub async fn insert_users(&self, count: usize) -> Result<Vec<entity::user::Model>, TestError> {
        let mut users = Vec::with_capacity(count);
        for n in 1..=count {
            users.push(self.insert_user(&format!("user{}@example.com", n)).await?);
        }

        Ok(users)
    }
}
