// time_tracker/src/store/mod.rs

//! Store traits consumed by the HTTP layer, and their PostgreSQL implementation.
//!
//! Every operation is a single future. Dropping it (caller cancelled, or a
//! `tokio::time::timeout` around it elapsed) aborts the statement and returns
//! the connection to the pool.

mod bind;
pub mod pool;
mod users;
mod worklogs;

use async_trait::async_trait;

use crate::error::TrackerResult;
use crate::models::{NewUser, Pagination, User, UserFilter, UserPatch, Worklog, WorklogWindow};

pub use pool::{DbSettings, PgStore};

#[async_trait]
pub trait UserStore: Send + Sync {
  /// Inserts the user and returns its id. Fails with `PassportDuplicate` when
  /// the passport is already registered.
  async fn create_user(&self, user: &NewUser) -> TrackerResult<i32>;

  /// Lists users matching `filter`, bounded by `page`. No match is an empty list.
  async fn users(&self, filter: &UserFilter, page: &Pagination) -> TrackerResult<Vec<User>>;

  /// Applies the supplied fields of `patch` and refreshes `updated_at`.
  /// Fails with `UserNotFound` when no user has `patch.id`.
  async fn update_user(&self, patch: &UserPatch) -> TrackerResult<()>;

  /// Fails with `UserNotFound` when no user has `id`.
  async fn delete_user(&self, id: i32) -> TrackerResult<()>;
}

#[async_trait]
pub trait WorklogStore: Send + Sync {
  /// Opens a worklog for `user_id` starting now and returns its id.
  async fn start_worklog(&self, task: &str, user_id: i32) -> TrackerResult<i32>;

  /// Closes an open worklog. At most one call succeeds per worklog; the rest
  /// observe `AlreadyDone`.
  async fn finish_worklog(&self, id: i32) -> TrackerResult<()>;

  /// Worklogs of `user_id` inside `window`, longest first. Open worklogs are
  /// measured up to the current time.
  async fn worklogs(&self, user_id: i32, window: WorklogWindow) -> TrackerResult<Vec<Worklog>>;
}
