// tracker_server/src/bin/people_info_stub.rs

//! Stand-in for the people-info service. Answers every well-formed request
//! with the same person.

use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use serde_json::json;
use std::env;

#[derive(Deserialize, Debug)]
struct InfoQuery {
  #[serde(rename = "passportSerie")]
  passport_serie: Option<String>,
  #[serde(rename = "passportNumber")]
  passport_number: Option<String>,
}

async fn info_handler(query: web::Query<InfoQuery>) -> HttpResponse {
  let supplied = |v: &Option<String>| v.as_deref().map_or(false, |s| !s.trim().is_empty());
  if !supplied(&query.passport_serie) || !supplied(&query.passport_number) {
    tracing::warn!(?query, "Missing passport parameters");
    return HttpResponse::BadRequest().json(json!({
      "status": "Bad Request",
      "error": "passportSerie and passportNumber are required",
    }));
  }

  HttpResponse::Ok().json(json!({
    "name": "Ivan",
    "surname": "Ivanov",
    "patronymic": "Ivanovich",
    "address": "Moscow, Lenina street, 5, 1",
  }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok();
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
    .init();

  let port = env::var("EXTERNAL_API_PORT")
    .ok()
    .and_then(|raw| raw.parse::<u16>().ok())
    .unwrap_or(8081);
  tracing::info!("People info stub listening on port {}", port);

  HttpServer::new(|| App::new().route("/info", web::get().to(info_handler)))
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
