pub mod sqlx_article_repository;
pub mod sqlx_comment_repository;
pub mod sqlx_interaction_ledger;
pub mod sqlx_settings_repository;
pub mod sqlx_user_repository;
