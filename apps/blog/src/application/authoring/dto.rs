use crate::domain::{article::entity::Article, settings::entity::BlogSettings};
use serde::{Deserialize, Serialize};

/// Author home page: blog settings plus both article lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDashboard {
    pub settings: BlogSettings,
    pub drafts: Vec<Article>,
    pub published: Vec<Article>,
}
