pub mod auth_service;
pub mod comment_service;
pub mod engagement_service;
pub mod policy;
pub mod social_service;
pub mod user_service;
pub mod video_service;
