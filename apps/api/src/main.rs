use std::sync::Arc;

use axum::{routing::get, Json, Router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_accounts::{
    controller::SignUpController, decorator::LogControllerDecorator, email::EmailValidatorAdapter,
    handlers, hasher::Argon2Hasher, mongo_repository_impl::{MongoAccountRepository, MongoLogRepository},
    validation::CompositeValidation, AddAccountService, Controller,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // color-eyre first, before any fallible operation
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Connection opens here and closes when the handle drops at shutdown;
    // repositories only ever see the injected handle.
    let db = database::mongodb::connect(&config.mongo)
        .await
        .map_err(|e| eyre::eyre!("MongoDB connection failed: {}", e))?;

    let controller = make_sign_up_controller(&db);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", handlers::router(controller))
        .layer(TraceLayer::new_for_http());

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Sign-up API listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Sign-up API shutdown complete");
    Ok(())
}

/// Composition root for the sign-up flow: Mongo repositories, argon2
/// hashing, the validation composite, and the logging decorator around the
/// controller.
fn make_sign_up_controller(db: &database::mongodb::Database) -> Arc<dyn Controller> {
    let accounts = MongoAccountRepository::new(db);
    let logs = MongoLogRepository::new(db);

    let validation = CompositeValidation::for_sign_up(Arc::new(EmailValidatorAdapter::new()));
    let service = AddAccountService::new(accounts, Argon2Hasher::new());
    let controller = SignUpController::new(Box::new(validation), service);

    Arc::new(LogControllerDecorator::new(controller, logs))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
