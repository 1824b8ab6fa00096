use crate::domain::{
    article::{repository::ArticleRepository, value_objects::ArticleDraft},
    identity::{repository::UserRepository, role::Role, value_objects::Username},
    shared::errors::DomainError,
};

/// Inserts a demo author, a demo reader and two articles into an empty store.
///
/// Returns `false` without writing anything when any article already exists.
pub async fn seed_demo_data(
    users: &dyn UserRepository,
    articles: &dyn ArticleRepository,
) -> Result<bool, DomainError> {
    if articles.count().await? > 0 {
        return Ok(false);
    }

    let admin = match users.find_by_username("admin").await? {
        Some(user) => user,
        None => users.create(&Username::new("admin".into())?, Role::Author).await?,
    };
    if users.find_by_username("SimonK").await?.is_none() {
        users
            .create(&Username::new("SimonK".into())?, Role::Reader)
            .await?;
    }

    articles
        .create(
            admin.id,
            &admin.username,
            &ArticleDraft {
                title: "Example draft article".into(),
                subtitle: "This is the subtitle".into(),
                content: "This is the content of the draft article".into(),
            },
        )
        .await?;
    let published = articles
        .create(
            admin.id,
            &admin.username,
            &ArticleDraft {
                title: "Example published article".into(),
                subtitle: "This is the subtitle".into(),
                content: "This is the content of the published article".into(),
            },
        )
        .await?;
    articles.publish(published.id).await?;

    tracing::info!("seeded demo users and articles");
    Ok(true)
}
