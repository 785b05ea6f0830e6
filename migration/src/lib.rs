pub use sea_orm_migration::prelude::*;

mod m20251018_000001_huddle_user;
mod m20251018_000002_huddle_event;
mod m20251018_000003_huddle_rsvp;
mod m20251018_000004_huddle_comment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_huddle_user::Migration),
            Box::new(m20251018_000002_huddle_event::Migration),
            Box::new(m20251018_000003_huddle_rsvp::Migration),
            Box::new(m20251018_000004_huddle_comment::Migration),
        ]
    }
}
