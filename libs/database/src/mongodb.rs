//! MongoDB connector.

use std::time::Duration;

use core_config::mongodb::MongoConfig;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use tracing::info;

// Re-export the handle types repositories are built from
pub use mongodb::{Client, Database};

const MAX_POOL_SIZE: u32 = 100;
const MIN_POOL_SIZE: u32 = 5;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for MongoDB connection setup
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect to MongoDB and return the configured [`Database`] handle.
///
/// Applies pool and timeout options, then verifies the connection with a
/// ping so a bad URI fails at startup rather than on the first request.
/// The returned handle is meant to be injected into repositories; its
/// connections close when the owning [`Client`] is dropped at shutdown.
pub async fn connect(config: &MongoConfig) -> Result<Database, MongoError> {
    info!("Connecting to MongoDB at {}", config.uri);

    let client = client_with_options(config).await?;
    let database = client.database(&config.database);

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!(database = %config.database, "MongoDB connection established");
    Ok(database)
}

async fn client_with_options(config: &MongoConfig) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(&config.uri).await?;

    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.min_pool_size = Some(MIN_POOL_SIZE);
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    Ok(Client::with_options(options)?)
}
