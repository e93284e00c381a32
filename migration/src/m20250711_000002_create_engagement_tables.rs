use sea_orm_migration::prelude::*;

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
                    .col(ColumnDef::new(Comments::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Comments::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Comments::Content).text().not_null())
                    .col(ColumnDef::new(Comments::VideoId).big_integer().not_null())
                    .col(ColumnDef::new(Comments::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Comments::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Comments::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_video_id")
                            .from(Comments::Table, Comments::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_owner_id")
                            .from(Comments::Table, Comments::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_video_id")
                    .table(Comments::Table)
                    .col(Comments::VideoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tweets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tweets::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Tweets::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Tweets::Content).text().not_null())
                    .col(ColumnDef::new(Tweets::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Tweets::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .col(ColumnDef::new(Tweets::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tweets_owner_id")
                            .from(Tweets::Table, Tweets::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tweets_owner_id")
                    .table(Tweets::Table)
                    .col(Tweets::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Likes::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Likes::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Likes::VideoId).big_integer().null())
                    .col(ColumnDef::new(Likes::CommentId).big_integer().null())
                    .col(ColumnDef::new(Likes::TweetId).big_integer().null())
                    .col(ColumnDef::new(Likes::LikedBy).big_integer().not_null())
                    .col(ColumnDef::new(Likes::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_video_id")
                            .from(Likes::Table, Likes::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_comment_id")
                            .from(Likes::Table, Likes::CommentId)
                            .to(Comments::Table, Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_tweet_id")
                            .from(Likes::Table, Likes::TweetId)
                            .to(Tweets::Table, Tweets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_liked_by")
                            .from(Likes::Table, Likes::LikedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A like points at exactly one target
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE likes ADD CONSTRAINT chk_likes_single_target \
                 CHECK (num_nonnulls(video_id, comment_id, tweet_id) = 1)",
            )
            .await?;

        // One like per (liker, target) pair. Partial indexes, one per target kind,
        // so the toggle's duplicate insert fails instead of racing.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_likes_video_once ON likes (liked_by, video_id) WHERE video_id IS NOT NULL",
            )
            .await?;
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_likes_comment_once ON likes (liked_by, comment_id) WHERE comment_id IS NOT NULL",
            )
            .await?;
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_likes_tweet_once ON likes (liked_by, tweet_id) WHERE tweet_id IS NOT NULL",
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subscriptions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Subscriptions::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Subscriptions::PublicId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Subscriptions::SubscriberId).big_integer().not_null())
                    .col(ColumnDef::new(Subscriptions::ChannelId).big_integer().not_null())
                    .col(ColumnDef::new(Subscriptions::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriptions_subscriber_id")
                            .from(Subscriptions::Table, Subscriptions::SubscriberId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriptions_channel_id")
                            .from(Subscriptions::Table, Subscriptions::ChannelId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One subscription per (subscriber, channel) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_subscriptions_pair")
                    .table(Subscriptions::Table)
                    .col(Subscriptions::SubscriberId)
                    .col(Subscriptions::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Subscriptions::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Likes::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tweets::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Comments::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    PublicId,
    Content,
    VideoId,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tweets {
    Table,
    Id,
    PublicId,
    Content,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Likes {
    Table,
    Id,
    PublicId,
    VideoId,
    CommentId,
    TweetId,
    LikedBy,
    CreatedAt,
}

#[derive(Iden)]
enum Subscriptions {
    Table,
    Id,
    PublicId,
    SubscriberId,
    ChannelId,
    CreatedAt,
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
