use super::helpers::spawn_app;
use blog::{
    application::interaction::dto::AddCommentRequest,
    domain::{
        identity::role::Role,
        shared::{errors::DomainError, ids::ArticleId},
        social::{comment::CommentBody, repository::CommentRepository},
    },
    infrastructure::repositories::sqlx_comment_repository::SqlxCommentRepository,
};

#[tokio::test]
async fn comments_are_listed_newest_first_and_leave_counters_alone() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;
    let article = app.published_article(&author).await;

    for text in ["first!", "lovely photos", "where was this?"] {
        app.state
            .interactions
            .add_comment(
                &reader.identity(),
                article.id,
                AddCommentRequest {
                    content: text.into(),
                },
            )
            .await
            .unwrap();
    }

    let comments = app.state.interactions.get_comments(article.id).await.unwrap();
    let contents: Vec<_> = comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["where was this?", "lovely photos", "first!"]);
    assert!(comments.iter().all(|c| c.username == "SimonK"));
    assert_eq!(app.counters(article.id).await, (0, 0));
}

#[tokio::test]
async fn comment_on_missing_article_is_not_found() {
    let app = spawn_app().await;
    let repository = SqlxCommentRepository::new(app.db.clone());

    let err = repository
        .add_comment(ArticleId(77), "SimonK", &CommentBody::new("hello").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn oversized_comment_is_rejected() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;
    let article = app.published_article(&author).await;

    let err = app
        .state
        .interactions
        .add_comment(
            &reader.identity(),
            article.id,
            AddCommentRequest {
                content: "x".repeat(501),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ValidationError(_)));
    assert!(app.state.interactions.get_comments(article.id).await.unwrap().is_empty());
}
