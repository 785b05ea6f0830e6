use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000001_huddle_user::Users, m20251018_000002_huddle_event::Events};

static IDX_COMMENTS_EVENT_ID: &str = "idx-comments-event_id";
static FK_COMMENTS_USER_ID: &str = "fk-comments-user_id";
static FK_COMMENTS_EVENT_ID: &str = "fk-comments-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_auto(Comments::Id))
                    .col(integer(Comments::EventId))
                    .col(integer(Comments::UserId))
                    .col(text(Comments::Content))
                    .col(timestamp(Comments::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Comments::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENTS_USER_ID)
                            .from(Comments::Table, Comments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMENTS_EVENT_ID)
                            .from(Comments::Table, Comments::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMENTS_EVENT_ID)
                    .table(Comments::Table)
                    .col(Comments::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMENTS_EVENT_ID)
                    .table(Comments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    EventId,
    UserId,
    Content,
    CreatedAt,
    UpdatedAt,
}
