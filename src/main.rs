use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobmatch_backend::shared::config::AppConfig;
use jobmatch_backend::{health, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!("Environment: {}", config.rust_env);

    let conn = Database::connect(config.connect_options())
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);
    let state = AppState::from_connection(Arc::clone(&db_arc));

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(health::health)
            .service(health::readiness)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}
