// tracker_server/src/web/handlers/worklog_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time_tracker::{Worklog, WorklogWindow};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

const TIME_FORMAT: &str = "%Y-%m-%d, %H:%M:%S";

#[derive(Deserialize, Debug)]
pub struct StartWorklogRequest {
  pub task: String,
  pub user_id: i32,
}

#[derive(Deserialize, Debug, Default)]
pub struct WorklogWindowQuery {
  pub start_date: Option<DateTime<Utc>>,
  pub end_date: Option<DateTime<Utc>>,
}

/// Worklog as presented to clients.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct WorklogView {
  pub id: i32,
  pub user_id: i32,
  pub task: String,
  pub start_time: String,
  pub end_time: Option<String>,
  pub duration: String,
}

impl WorklogView {
  pub fn new(worklog: Worklog, now: DateTime<Utc>) -> Self {
    let duration = format_duration(worklog.duration_at(now));
    Self {
      id: worklog.id,
      user_id: worklog.user_id,
      task: worklog.task,
      start_time: worklog.started_at.format(TIME_FORMAT).to_string(),
      end_time: worklog.finished_at.map(|at| at.format(TIME_FORMAT).to_string()),
      duration,
    }
  }
}

/// Renders as `"<hours>h <minutes>m"`; seconds are truncated.
pub fn format_duration(duration: Duration) -> String {
  let minutes = duration.num_minutes().max(0);
  format!("{}h {}m", minutes / 60, minutes % 60)
}

#[instrument(name = "handler::start_worklog", skip(app_state, req_body), fields(user_id = req_body.user_id))]
pub async fn start_worklog_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<StartWorklogRequest>,
) -> Result<HttpResponse, AppError> {
  let StartWorklogRequest { task, user_id } = req_body.into_inner();
  if task.trim().is_empty() {
    return Err(AppError::Validation("Task must not be empty.".to_string()));
  }

  let worklog_id = app_state
    .within_deadline(app_state.worklogs.start_worklog(&task, user_id))
    .await?;

  info!(worklog_id, "Worklog started.");
  Ok(HttpResponse::Created().json(json!({ "worklog_id": worklog_id })))
}

#[instrument(name = "handler::finish_worklog", skip(app_state, path), fields(worklog_id = %path.as_ref()))]
pub async fn finish_worklog_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let worklog_id = path.into_inner();

  app_state
    .within_deadline(app_state.worklogs.finish_worklog(worklog_id))
    .await?;

  info!("Worklog {} finished.", worklog_id);
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::list_worklogs", skip(app_state, path, query_params), fields(user_id = %path.as_ref()))]
pub async fn list_worklogs_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  query_params: web::Query<WorklogWindowQuery>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let now = Utc::now();
  let window = WorklogWindow::new(
    query_params.start_date.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
    query_params.end_date.unwrap_or(now),
  )?;

  let worklogs = app_state
    .within_deadline(app_state.worklogs.worklogs(user_id, window))
    .await?;

  info!("Listed {} worklogs for user {}.", worklogs.len(), user_id);
  let views: Vec<WorklogView> = worklogs.into_iter().map(|worklog| WorklogView::new(worklog, now)).collect();
  Ok(HttpResponse::Ok().json(views))
}
