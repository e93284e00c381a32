pub mod comment_service;
pub mod like_service;
pub mod playlist_service;
pub mod storage_service;
pub mod subscription_service;
pub mod tweet_service;
pub mod video_service;
