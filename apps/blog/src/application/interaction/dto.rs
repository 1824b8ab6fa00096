use crate::domain::{
    article::entity::Article, interaction::outcome::InteractionOutcome, social::comment::Comment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub content: String,
}

/// Everything the article page needs after a reader opens it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleView {
    pub article: Article,
    pub read: InteractionOutcome,
    pub liked_by_viewer: bool,
    pub comments: Vec<Comment>,
}
