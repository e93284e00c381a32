pub mod auth_model;
pub mod comment_model;
pub mod like_model;
pub mod playlist_model;
pub mod subscription_model;
pub mod tweet_model;
pub mod video_model;
