use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn comment(&self) -> CommentFixtures<'_> {
        CommentFixtures { context: self }
    }
}

pub struct CommentFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> CommentFixtures<'a> {
    pub async fn insert_comment_at(
        &self,
        event_id: i32,
        user_id: i32,
        content: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::comment::Model, TestError> {
        Ok(entity::prelude::Comment::insert(entity::comment::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
