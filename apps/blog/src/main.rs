use blog::{
    config::Config,
    infrastructure::database::{
        pool::{create_pool, run_migrations},
        seed::seed_demo_data,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,blog=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(
        &config.database_url,
        config.database_max_connections,
        config.acquire_timeout(),
    )
    .await?;
    run_migrations(&db, config.ignore_missing_migrations).await?;

    let state = AppState::new(db, config.ledger_settings());
    if config.seed_demo_data {
        seed_demo_data(state.users.as_ref(), state.articles.as_ref()).await?;
    }

    let settings = state.settings.load().await?;
    tracing::info!(
        title = %settings.title,
        database = %config.database_url,
        "blog store ready"
    );
    Ok(())
}
