use serde::{Deserialize, Serialize};
use validator::Validate;

/// Author-supplied fields of a new article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArticleDraft {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub subtitle: String,
    #[validate(length(min = 1, max = 100000))]
    pub content: String,
}

/// Replacement text for an existing article. Counters and status are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArticleEdit {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub subtitle: String,
    #[validate(length(min = 1, max = 100000))]
    pub content: String,
}
