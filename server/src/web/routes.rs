// tracker_server/src/web/routes.rs

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{user_handlers, worklog_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Malformed bodies, query strings and path segments answer with the same
// error body as every other client error.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
    .app_data(web::PathConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()));
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  extractor_configs(cfg);

  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/users")
          .route("", web::get().to(user_handlers::list_users_handler))
          .route("", web::post().to(user_handlers::create_user_handler))
          .route("/{user_id}", web::patch().to(user_handlers::update_user_handler))
          .route("/{user_id}", web::delete().to(user_handlers::delete_user_handler))
          .route("/{user_id}/worklogs", web::get().to(worklog_handlers::list_worklogs_handler)),
      )
      .service(
        web::scope("/worklogs")
          .route("/start", web::post().to(worklog_handlers::start_worklog_handler))
          .route("/finish/{worklog_id}", web::patch().to(worklog_handlers::finish_worklog_handler)),
      ),
  );
}
