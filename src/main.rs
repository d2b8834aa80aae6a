use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use localbiz::api::{self, AppState, Stores};
use localbiz::config::Config;
use localbiz::mongodb::{
    MongoDbBusinessStore, MongoDbPhotoStore, MongoDbReviewStore, db_client, ensure_indexes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    info!(
        "connecting to database at {}:{}",
        config.mongo_host, config.mongo_port
    );

    let client = db_client("localbiz".to_string(), &config.mongo_url())
        .await
        .context("failed to connect to database")?;
    let db = client.database(&config.mongo_db_name);

    ensure_indexes(&db)
        .await
        .context("failed to create indexes")?;
    info!("connected to database: {}", config.mongo_db_name);

    let stores = Stores {
        businesses: Arc::new(MongoDbBusinessStore::new(db.clone())),
        reviews: Arc::new(MongoDbReviewStore::new(db.clone())),
        photos: Arc::new(MongoDbPhotoStore::new(db)),
    };

    api::start_server(AppState::new(stores), config.port).await
}
