// tracker_server/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use time_tracker::{passport, NewUser, Pagination, UserFilter, UserPatch};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct ListUsersQuery {
  pub name: Option<String>,
  pub surname: Option<String>,
  pub patronymic: Option<String>,
  pub address: Option<String>,
  pub series: Option<String>,
  pub number: Option<String>,
  pub created_after: Option<DateTime<Utc>>,
  pub created_before: Option<DateTime<Utc>>,
  pub limit: Option<u32>,
  pub offset: Option<u32>,
}

impl ListUsersQuery {
  fn into_parts(self) -> (UserFilter, Pagination) {
    let filter = UserFilter {
      name: self.name,
      surname: self.surname,
      patronymic: self.patronymic,
      address: self.address,
      passport_series: self.series,
      passport_number: self.number,
      created_after: self.created_after,
      created_before: self.created_before,
    };
    let page = Pagination {
      limit: self.limit.unwrap_or(0),
      offset: self.offset.unwrap_or(0),
    };
    (filter, page)
  }
}

#[derive(Deserialize, Debug)]
pub struct CreateUserRequest {
  #[serde(rename = "passportNumber")]
  pub passport_number: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct PassportChange {
  pub series: Option<String>,
  pub number: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PersonChange {
  pub name: Option<String>,
  pub surname: Option<String>,
  pub patronymic: Option<String>,
  pub address: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateUserRequest {
  #[serde(default)]
  pub passport: Option<PassportChange>,
  #[serde(default)]
  pub person: Option<PersonChange>,
}

impl UpdateUserRequest {
  /// Checks supplied passport parts and builds the patch. Empty strings count
  /// as "not supplied".
  fn into_patch(self, user_id: i32) -> Result<UserPatch, AppError> {
    let mut patch = UserPatch::new(user_id);

    if let Some(change) = self.passport {
      if let Some(series) = change.series.as_deref().filter(|s| !s.is_empty()) {
        if !passport::is_valid_series(series) {
          return Err(AppError::Validation(format!(
            "Passport series must be {} digits.",
            passport::SERIES_LEN
          )));
        }
      }
      if let Some(number) = change.number.as_deref().filter(|n| !n.is_empty()) {
        if !passport::is_valid_number(number) {
          return Err(AppError::Validation(format!(
            "Passport number must be {} digits.",
            passport::NUMBER_LEN
          )));
        }
      }
      patch.passport_series = change.series;
      patch.passport_number = change.number;
    }

    if let Some(change) = self.person {
      patch.name = change.name;
      patch.surname = change.surname;
      patch.patronymic = change.patronymic;
      patch.address = change.address;
    }

    Ok(patch)
  }
}

#[instrument(name = "handler::list_users", skip(app_state, query_params))]
pub async fn list_users_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
  let (filter, page) = query_params.into_inner().into_parts();

  let users = app_state.within_deadline(app_state.users.users(&filter, &page)).await?;

  info!("Listed {} users.", users.len());
  Ok(HttpResponse::Ok().json(json!({ "users": users })))
}

#[instrument(name = "handler::create_user", skip(app_state, req_body))]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
  let passport = passport::parse(&req_body.passport_number)?;

  let person = app_state.within_deadline(app_state.people.lookup(&passport)).await?;
  let new_user = NewUser { passport, person };

  let user_id = app_state.within_deadline(app_state.users.create_user(&new_user)).await?;

  info!(user_id, "User created.");
  Ok(HttpResponse::Created().json(json!({ "user_id": user_id })))
}

#[instrument(name = "handler::update_user", skip(app_state, path, req_body), fields(user_id = %path.as_ref()))]
pub async fn update_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  req_body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();
  let patch = req_body.into_inner().into_patch(user_id).map_err(|e| {
    warn!("Rejected update for user {}: {}", user_id, e);
    e
  })?;

  app_state.within_deadline(app_state.users.update_user(&patch)).await?;

  info!("User {} updated.", user_id);
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::delete_user", skip(app_state, path), fields(user_id = %path.as_ref()))]
pub async fn delete_user_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let user_id = path.into_inner();

  app_state.within_deadline(app_state.users.delete_user(user_id)).await?;

  info!("User {} deleted.", user_id);
  Ok(HttpResponse::NoContent().finish())
}
