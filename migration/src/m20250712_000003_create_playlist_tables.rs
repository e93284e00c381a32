use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Playlists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Playlists::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Playlists::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Playlists::Name).string().not_null())
                    .col(ColumnDef::new(Playlists::Description).text().not_null())
                    .col(ColumnDef::new(Playlists::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Playlists::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Playlists::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlists_owner_id")
                            .from(Playlists::Table, Playlists::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_playlists_owner_id")
                    .table(Playlists::Table)
                    .col(Playlists::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Ordered membership (Many-to-Many with position)
        manager
            .create_table(
                Table::create()
                    .table(PlaylistVideos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PlaylistVideos::PlaylistId).big_integer().not_null())
                    .col(ColumnDef::new(PlaylistVideos::VideoId).big_integer().not_null())
                    .col(ColumnDef::new(PlaylistVideos::Position).integer().not_null())
                    .primary_key(Index::create().col(PlaylistVideos::PlaylistId).col(PlaylistVideos::VideoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_videos_playlist_id")
                            .from(PlaylistVideos::Table, PlaylistVideos::PlaylistId)
                            .to(Playlists::Table, Playlists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_videos_video_id")
                            .from(PlaylistVideos::Table, PlaylistVideos::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PlaylistVideos::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Playlists::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Playlists {
    Table,
    Id,
    PublicId,
    Name,
    Description,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum PlaylistVideos {
    Table,
    PlaylistId,
    VideoId,
    Position,
}

#[derive(Iden)]
enum Videos {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
