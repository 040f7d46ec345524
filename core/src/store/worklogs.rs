// time_tracker/src/store/worklogs.rs

//! PostgreSQL implementation of [`WorklogStore`].
//!
//! A worklog is open while `finished_at IS NULL`. Closing it is a single
//! conditional UPDATE, so concurrent finish attempts are serialized by the
//! row lock and only the first one matches.

use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Worklog, WorklogWindow};
use crate::store::{PgStore, WorklogStore};

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
  matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

#[async_trait]
impl WorklogStore for PgStore {
  #[instrument(name = "store::start_worklog", skip(self, task))]
  async fn start_worklog(&self, task: &str, user_id: i32) -> TrackerResult<i32> {
    let query = "
      INSERT INTO worklogs (user_id, task, started_at)
      VALUES ($1, $2, NOW())
      RETURNING id
    ";
    debug!(query, task, "executing query");

    let result = sqlx::query_scalar::<_, i32>(query)
      .bind(user_id)
      .bind(task)
      .fetch_one(&self.pool)
      .await;

    match result {
      Ok(worklog_id) => {
        debug!(worklog_id, "worklog started successfully");
        Ok(worklog_id)
      }
      Err(e) if is_foreign_key_violation(&e) => {
        warn!("cannot start worklog for unknown user");
        Err(TrackerError::UserNotFound { id: user_id })
      }
      Err(e) => {
        error!(error = %e, "failed to execute query");
        Err(TrackerError::database("store.start_worklog", e))
      }
    }
  }

  #[instrument(name = "store::finish_worklog", skip(self))]
  async fn finish_worklog(&self, id: i32) -> TrackerResult<()> {
    let query = "
      UPDATE worklogs
      SET finished_at = NOW()
      WHERE id = $1 AND finished_at IS NULL
    ";
    debug!(query, "executing query");

    let done = sqlx::query(query).bind(id).execute(&self.pool).await.map_err(|e| {
      error!(error = %e, "failed to execute query");
      TrackerError::database("store.finish_worklog", e)
    })?;

    if done.rows_affected() == 1 {
      debug!("worklog finished successfully");
      return Ok(());
    }

    // Nothing matched: either closed already or never existed. Rows only go
    // away together with their user, so an existing row here is a closed one.
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM worklogs WHERE id = $1)")
      .bind(id)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| {
        error!(error = %e, "failed to probe worklog");
        TrackerError::database("store.finish_worklog", e)
      })?;

    if exists {
      warn!("worklog was already finished");
      Err(TrackerError::AlreadyDone { id })
    } else {
      warn!("worklog not found");
      Err(TrackerError::WorklogNotFound { id })
    }
  }

  #[instrument(name = "store::worklogs", skip(self, window), fields(start = %window.start(), end = %window.end()))]
  async fn worklogs(&self, user_id: i32, window: WorklogWindow) -> TrackerResult<Vec<Worklog>> {
    // Open worklogs are measured up to NOW() for ordering.
    let query = "
      SELECT id, user_id, task, started_at, finished_at
      FROM worklogs
      WHERE user_id = $1 AND started_at >= $2 AND (finished_at <= $3 OR finished_at IS NULL)
      ORDER BY COALESCE(finished_at, NOW()) - started_at DESC, id
    ";
    debug!(query, "executing query");

    let worklogs: Vec<Worklog> = sqlx::query_as(query)
      .bind(user_id)
      .bind(window.start())
      .bind(window.end())
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!(error = %e, "failed to execute query");
        TrackerError::database("store.worklogs", e)
      })?;

    debug!(count = worklogs.len(), "worklogs retrieved successfully");
    Ok(worklogs)
  }
}
