use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251018_000001_huddle_user::Users, m20251018_000002_huddle_event::Events};

static PK_RSVPS: &str = "pk-rsvps";
static IDX_RSVPS_EVENT_ID_STATUS: &str = "idx-rsvps-event_id-status";
static FK_RSVPS_USER_ID: &str = "fk-rsvps-user_id";
static FK_RSVPS_EVENT_ID: &str = "fk-rsvps-event_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rsvps::Table)
                    .if_not_exists()
                    .col(integer(Rsvps::UserId))
                    .col(integer(Rsvps::EventId))
                    .col(string_len(Rsvps::Status, 20))
                    .col(timestamp(Rsvps::CreatedAt).default(Expr::current_timestamp()))
                    // One row per (user, event), re-registration updates in place
                    .primary_key(
                        Index::create()
                            .name(PK_RSVPS)
                            .col(Rsvps::UserId)
                            .col(Rsvps::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RSVPS_USER_ID)
                            .from(Rsvps::Table, Rsvps::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RSVPS_EVENT_ID)
                            .from(Rsvps::Table, Rsvps::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RSVPS_EVENT_ID_STATUS)
                    .table(Rsvps::Table)
                    .col(Rsvps::EventId)
                    .col(Rsvps::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RSVPS_EVENT_ID_STATUS)
                    .table(Rsvps::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rsvps::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Rsvps {
    Table,
    UserId,
    EventId,
    Status,
    CreatedAt,
}
