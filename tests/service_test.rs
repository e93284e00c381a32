//! Service-level tests against SeaORM's mock database.
//!
//! Each test seeds the mock with the query results the service is expected
//! to ask for, in order, then asserts on the outcome and (where it matters)
//! on the statements the service actually issued.

use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

use playtube::entities::{comment, like, playlist, playlist_video, subscription, tweet, user, video};
use playtube::models::auth_model::CurrentUser;
use playtube::models::comment_model::CreateCommentRequest;
use playtube::models::video_model::VideoListParams;
use playtube::services::comment_service::CommentService;
use playtube::services::like_service::LikeService;
use playtube::services::playlist_service::PlaylistService;
use playtube::services::subscription_service::SubscriptionService;
use playtube::services::tweet_service::TweetService;
use playtube::services::video_service::VideoService;
use playtube::utils::api_error::ApiError;
use playtube::utils::pagination::PageQuery;

fn actor(id: i64) -> CurrentUser {
    CurrentUser {
        id,
        public_id: Uuid::now_v7(),
        username: "tester".to_string(),
    }
}

fn user_row(id: i64, username: &str) -> user::Model {
    user::Model {
        id,
        public_id: Uuid::now_v7(),
        username: username.to_string(),
        email: format!("{username}@playtube.dev"),
        avatar_url: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn video_row(id: i64, owner_id: i64) -> video::Model {
    video::Model {
        id,
        public_id: Uuid::now_v7(),
        title: "Test Video".to_string(),
        description: "A test fixture".to_string(),
        video_url: "https://cdn.example/video.mp4".to_string(),
        video_file_id: "vid_1".to_string(),
        thumbnail_url: "https://cdn.example/thumb.webp".to_string(),
        thumbnail_file_id: "thumb_1".to_string(),
        duration: 12.5,
        views: 0,
        is_published: true,
        owner_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn comment_row(id: i64, video_id: i64, owner_id: i64) -> comment::Model {
    comment::Model {
        id,
        public_id: Uuid::now_v7(),
        content: "nice video".to_string(),
        video_id,
        owner_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn like_row(id: i64, video_id: Option<i64>, liked_by: i64) -> like::Model {
    like::Model {
        id,
        public_id: Uuid::now_v7(),
        video_id,
        comment_id: None,
        tweet_id: None,
        liked_by,
        created_at: Utc::now(),
    }
}

fn tweet_row(id: i64, owner_id: i64) -> tweet::Model {
    tweet::Model {
        id,
        public_id: Uuid::now_v7(),
        content: "hello world".to_string(),
        owner_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn playlist_row(id: i64, owner_id: i64) -> playlist::Model {
    playlist::Model {
        id,
        public_id: Uuid::now_v7(),
        name: "Favorites".to_string(),
        description: "Videos I like".to_string(),
        owner_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
}

#[tokio::test]
async fn toggling_a_video_like_twice_returns_to_the_original_state() {
    let me = actor(2);
    let video = video_row(10, 1);
    let video_pid = video.public_id;
    let saved = like_row(99, Some(10), 2);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // first toggle: resolve video, no existing edge, insert
        .append_query_results([vec![video.clone()]])
        .append_query_results([Vec::<like::Model>::new()])
        .append_query_results([vec![saved.clone()]])
        // second toggle: resolve video, edge exists, delete
        .append_query_results([vec![video.clone()]])
        .append_query_results([vec![saved.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let first = LikeService::toggle_video_like(&db, &me, video_pid)
        .await
        .unwrap();
    let edge = first.expect("first toggle should create the edge");
    assert_eq!(edge.video, Some(video_pid));
    assert_eq!(edge.liked_by, me.public_id);

    let second = LikeService::toggle_video_like(&db, &me, video_pid)
        .await
        .unwrap();
    assert!(second.is_none(), "second toggle should remove the edge");

    let log = db.into_transaction_log();
    let last = format!("{:?}", log.last().unwrap());
    assert!(last.contains("DELETE"), "second toggle must delete: {last}");
}

#[tokio::test]
async fn liking_a_missing_video_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<video::Model>::new()])
        .into_connection();

    let err = LikeService::toggle_video_like(&db, &actor(2), Uuid::now_v7())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn subscription_toggle_follows_the_same_involution() {
    let me = actor(5);
    let channel = user_row(3, "channel");
    let channel_pid = channel.public_id;
    let edge = subscription::Model {
        id: 41,
        public_id: Uuid::now_v7(),
        subscriber_id: 5,
        channel_id: 3,
        created_at: Utc::now(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![channel.clone()]])
        .append_query_results([Vec::<subscription::Model>::new()])
        .append_query_results([vec![edge.clone()]])
        .append_query_results([vec![channel.clone()]])
        .append_query_results([vec![edge.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let first = SubscriptionService::toggle(&db, &me, channel_pid)
        .await
        .unwrap();
    let created = first.expect("first toggle should subscribe");
    assert_eq!(created.channel, channel_pid);
    assert_eq!(created.subscriber, me.public_id);

    let second = SubscriptionService::toggle(&db, &me, channel_pid)
        .await
        .unwrap();
    assert!(second.is_none(), "second toggle should unsubscribe");
}

#[test]
fn empty_comment_content_fails_validation() {
    let req: CreateCommentRequest = serde_json::from_str(r#"{ "content": "   " }"#).unwrap();
    assert!(req.validate().is_err());

    let missing: CreateCommentRequest = serde_json::from_str("{}").unwrap();
    assert!(missing.validate().is_err());
}

#[tokio::test]
async fn non_owner_tweet_update_is_forbidden_and_writes_nothing() {
    let theirs = tweet_row(5, 1);
    let pid = theirs.public_id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![theirs]])
        .into_connection();

    let err = TweetService::update(&db, &actor(2), pid, "hijacked".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));

    // only the lookup ran
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn non_owner_comment_delete_is_forbidden() {
    let theirs = comment_row(9, 10, 1);
    let pid = theirs.public_id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![theirs]])
        .into_connection();

    let err = CommentService::delete(&db, &actor(2), pid).await.unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn non_owner_publish_toggle_is_forbidden() {
    let theirs = video_row(10, 1);
    let pid = theirs.public_id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![theirs]])
        .into_connection();

    let err = VideoService::toggle_publish(&db, &actor(2), pid)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[tokio::test]
async fn adding_a_video_already_in_the_playlist_conflicts() {
    let me = actor(2);
    let list = playlist_row(7, 2);
    let video = video_row(10, 1);
    let membership = playlist_video::Model {
        playlist_id: 7,
        video_id: 10,
        position: 0,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![list.clone()]])
        .append_query_results([vec![video.clone()]])
        .append_query_results([vec![membership]])
        .into_connection();

    let err = PlaylistService::add_video(&db, &me, list.public_id, video.public_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn removing_a_video_not_in_the_playlist_is_not_found() {
    let me = actor(2);
    let list = playlist_row(7, 2);
    let video = video_row(10, 1);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![list.clone()]])
        .append_query_results([vec![video.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let err = PlaylistService::remove_video(&db, &me, list.public_id, video.public_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn comment_list_pages_and_flattens_the_owner() {
    let video = video_row(10, 1);
    let alice = user_row(1, "alice");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![video.clone()]])
        .append_query_results([vec![count_row(12)]])
        .append_query_results([vec![
            (comment_row(31, 10, 1), alice.clone()),
            (comment_row(30, 10, 1), alice.clone()),
        ]])
        .into_connection();

    let paging = PageQuery {
        page: Some(3),
        limit: Some(5),
    };
    let res = CommentService::list_for_video(&db, video.public_id, paging)
        .await
        .unwrap();

    assert_eq!(res.meta.total, 12);
    assert_eq!(res.meta.page, 3);
    assert_eq!(res.meta.limit, 5);
    assert_eq!(res.data.len(), 2);
    assert_eq!(res.data[0].owner.username, "alice");

    // page 3 of 5 skips the first 10 rows
    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("OFFSET"), "paged query must skip: {log}");
}

#[tokio::test]
async fn zero_matches_is_an_empty_page_not_an_error() {
    let video = video_row(10, 1);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![video.clone()]])
        .append_query_results([vec![count_row(0)]])
        .append_query_results([Vec::<(comment::Model, user::Model)>::new()])
        .into_connection();

    let res = CommentService::list_for_video(&db, video.public_id, PageQuery::default())
        .await
        .unwrap();
    assert_eq!(res.meta.total, 0);
    assert!(res.data.is_empty());
}

#[tokio::test]
async fn unknown_sort_field_is_a_validation_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let params = VideoListParams {
        sort_by: Some("ownerId".to_string()),
        ..Default::default()
    };
    let err = VideoService::list(&db, params).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}
