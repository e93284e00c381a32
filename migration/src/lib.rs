pub use sea_orm_migration::prelude::*;

mod m20250710_000001_create_users_and_videos;
mod m20250711_000002_create_engagement_tables;
mod m20250712_000003_create_playlist_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250710_000001_create_users_and_videos::Migration),
            Box::new(m20250711_000002_create_engagement_tables::Migration),
            Box::new(m20250712_000003_create_playlist_tables::Migration),
        ]
    }
}
