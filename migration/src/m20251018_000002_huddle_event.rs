use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251018_000001_huddle_user::Users;

static IDX_EVENTS_OFFICE_STARTS_AT: &str = "idx-events-office-starts_at";
static FK_EVENTS_CREATED_BY: &str = "fk-events-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string_len(Events::Title, 200))
                    .col(text_null(Events::Description))
                    .col(string_len_null(Events::Location, 255))
                    .col(string_len(Events::Office, 8).default("VIE"))
                    .col(timestamp(Events::StartsAt))
                    .col(integer_null(Events::Capacity))
                    .col(string_len(Events::SignupMode, 20).default("internal"))
                    .col(text_null(Events::ExternalUrl))
                    .col(boolean(Events::IsPublic).default(true))
                    .col(string_len(Events::Status, 20).default("active"))
                    .col(integer(Events::CreatedBy))
                    .col(timestamp(Events::CreatedAt).default(Expr::current_timestamp()))
                    // Declared inline, SQLite cannot add foreign keys to an existing table
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENTS_CREATED_BY)
                            .from(Events::Table, Events::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENTS_OFFICE_STARTS_AT)
                    .table(Events::Table)
                    .col(Events::Office)
                    .col(Events::StartsAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENTS_OFFICE_STARTS_AT)
                    .table(Events::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    Title,
    Description,
    Location,
    Office,
    StartsAt,
    Capacity,
    SignupMode,
    ExternalUrl,
    IsPublic,
    Status,
    CreatedBy,
    CreatedAt,
}
