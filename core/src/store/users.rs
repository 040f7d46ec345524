// time_tracker/src/store/users.rs

//! PostgreSQL implementation of [`UserStore`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::{debug, error, instrument, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::user::supplied;
use crate::models::{NewUser, Pagination, Passport, Person, User, UserFilter, UserPatch};
use crate::query::{list_users_query, update_user_query};
use crate::store::bind::BindArgs;
use crate::store::{PgStore, UserStore};

/// Flat row as stored in `users`.
#[derive(Debug, FromRow)]
struct UserRow {
  id: i32,
  passport_series: String,
  passport_number: String,
  name: String,
  surname: String,
  patronymic: Option<String>,
  address: Option<String>,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User {
      id: row.id,
      passport: Passport {
        series: row.passport_series,
        number: row.passport_number,
      },
      person: Person {
        name: row.name,
        surname: row.surname,
        patronymic: row.patronymic,
        address: row.address,
      },
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
  matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[async_trait]
impl UserStore for PgStore {
  #[instrument(name = "store::create_user", skip(self, user), fields(series = %user.passport.series, number = %user.passport.number))]
  async fn create_user(&self, user: &NewUser) -> TrackerResult<i32> {
    let query = "
      INSERT INTO users (passport_series, passport_number, name, surname, patronymic, address, created_at, updated_at)
      VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
      RETURNING id
    ";
    debug!(query, "executing query");

    let result = sqlx::query_scalar::<_, i32>(query)
      .bind(&user.passport.series)
      .bind(&user.passport.number)
      .bind(&user.person.name)
      .bind(&user.person.surname)
      // empty optional details are stored as NULL
      .bind(supplied(&user.person.patronymic))
      .bind(supplied(&user.person.address))
      .fetch_one(&self.pool)
      .await;

    match result {
      Ok(user_id) => {
        debug!(user_id, "successfully created user");
        Ok(user_id)
      }
      Err(e) if is_unique_violation(&e) => {
        warn!("user with such passport series and number already exists");
        Err(TrackerError::PassportDuplicate)
      }
      Err(e) => {
        error!(error = %e, "failed to execute query");
        Err(TrackerError::database("store.create_user", e))
      }
    }
  }

  #[instrument(name = "store::users", skip(self, filter, page))]
  async fn users(&self, filter: &UserFilter, page: &Pagination) -> TrackerResult<Vec<User>> {
    let built = list_users_query(filter, page);
    debug!(query = %built.sql, args = ?built.args, ?filter, ?page, "executing query");

    let rows: Vec<UserRow> = sqlx::query_as(&built.sql)
      .bind_all(built.args)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!(error = %e, "failed to execute query");
        TrackerError::database("store.users", e)
      })?;

    debug!(count = rows.len(), "successfully retrieved users");
    Ok(rows.into_iter().map(User::from).collect())
  }

  #[instrument(name = "store::update_user", skip(self, patch), fields(user_id = patch.id))]
  async fn update_user(&self, patch: &UserPatch) -> TrackerResult<()> {
    let built = update_user_query(patch);
    debug!(query = %built.sql, args = ?built.args, "executing query");

    let result = sqlx::query(&built.sql).bind_all(built.args).execute(&self.pool).await;

    match result {
      Ok(done) if done.rows_affected() == 0 => {
        warn!("user not found");
        Err(TrackerError::UserNotFound { id: patch.id })
      }
      Ok(_) => {
        debug!("successfully updated user");
        Ok(())
      }
      Err(e) if is_unique_violation(&e) => {
        warn!("passport is already taken by another user");
        Err(TrackerError::PassportDuplicate)
      }
      Err(e) => {
        error!(error = %e, "failed to execute query");
        Err(TrackerError::database("store.update_user", e))
      }
    }
  }

  #[instrument(name = "store::delete_user", skip(self))]
  async fn delete_user(&self, id: i32) -> TrackerResult<()> {
    let query = "DELETE FROM users WHERE id = $1";
    debug!(query, "executing query");

    let done = sqlx::query(query).bind(id).execute(&self.pool).await.map_err(|e| {
      error!(error = %e, "failed to execute query");
      TrackerError::database("store.delete_user", e)
    })?;

    // A DELETE matching nothing is not a driver error.
    if done.rows_affected() == 0 {
      warn!("user not found");
      return Err(TrackerError::UserNotFound { id });
    }

    debug!("successfully deleted user");
    Ok(())
  }
}
