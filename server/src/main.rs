// tracker_server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use time_tracker::PgStore;
use tracker_server::config::AppConfig;
use tracker_server::services::HttpPeopleLookup;
use tracker_server::state::AppState;
use tracker_server::telemetry::init_tracing;
use tracker_server::web::configure_app_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  init_tracing(app_config.env);

  // DATABASE_URL may carry credentials, so the config itself is not logged.
  tracing::info!(env = ?app_config.env, "Application configuration loaded successfully.");
  tracing::info!("Starting time tracker server...");

  let store = match PgStore::connect(&app_config.db).await {
    Ok(store) => {
      tracing::info!("Successfully connected to the database.");
      store
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      return Err(e).context("Database connection error");
    }
  };

  let people = HttpPeopleLookup::new(app_config.people_api_url.clone(), app_config.request_timeout)
    .context("Failed to build people info client")?;

  let app_state = AppState {
    users: Arc::new(store.clone()),
    worklogs: Arc::new(store.clone()),
    people: Arc::new(people),
    config: app_config.clone(),
  };

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .shutdown_timeout(app_config.shutdown_timeout.as_secs())
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")?;

  tracing::info!("HTTP server stopped, closing database pool.");
  store.close().await;
  Ok(())
}
