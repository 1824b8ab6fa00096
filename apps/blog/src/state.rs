use crate::{
    application::{
        authoring::use_case::AuthoringUseCase, interaction::use_case::InteractionUseCase,
        settings::use_case::SettingsUseCase,
    },
    config::LedgerSettings,
    infrastructure::repositories::{
        sqlx_article_repository::SqlxArticleRepository,
        sqlx_comment_repository::SqlxCommentRepository,
        sqlx_interaction_ledger::SqlxInteractionLedger,
        sqlx_settings_repository::SqlxSettingsRepository,
        sqlx_user_repository::SqlxUserRepository,
    },
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Wiring handed to whatever request layer hosts the blog.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub users: Arc<SqlxUserRepository>,
    pub articles: Arc<SqlxArticleRepository>,
    pub ledger: Arc<SqlxInteractionLedger>,
    pub interactions: Arc<InteractionUseCase>,
    pub authoring: Arc<AuthoringUseCase>,
    pub settings: Arc<SettingsUseCase>,
}

impl AppState {
    pub fn new(db: SqlitePool, ledger_settings: LedgerSettings) -> Self {
        let users = Arc::new(SqlxUserRepository::new(db.clone()));
        let articles = Arc::new(SqlxArticleRepository::new(db.clone()));
        let comments = Arc::new(SqlxCommentRepository::new(db.clone()));
        let settings_repo = Arc::new(SqlxSettingsRepository::new(db.clone()));
        let ledger = Arc::new(SqlxInteractionLedger::new(db.clone(), ledger_settings));

        Self {
            interactions: Arc::new(InteractionUseCase::new(
                ledger.clone(),
                comments,
                articles.clone(),
            )),
            authoring: Arc::new(AuthoringUseCase::new(
                articles.clone(),
                settings_repo.clone(),
            )),
            settings: Arc::new(SettingsUseCase::new(settings_repo)),
            db,
            users,
            articles,
            ledger,
        }
    }
}
