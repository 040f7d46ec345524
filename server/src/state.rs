// tracker_server/src/state.rs
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::services::PeopleLookup;
use std::future::Future;
use std::sync::Arc;
use time_tracker::{UserStore, WorklogStore};

#[derive(Clone)]
pub struct AppState {
  pub users: Arc<dyn UserStore>,
  pub worklogs: Arc<dyn WorklogStore>,
  pub people: Arc<dyn PeopleLookup>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Runs a store or lookup call under the request deadline. On expiry the
  /// future is dropped, which aborts the statement and frees its connection.
  pub async fn within_deadline<T, E, F>(&self, call: F) -> Result<T>
  where
    F: Future<Output = std::result::Result<T, E>>,
    E: Into<AppError>,
  {
    let deadline = self.config.request_timeout;
    match tokio::time::timeout(deadline, call).await {
      Ok(outcome) => outcome.map_err(Into::into),
      Err(_) => {
        tracing::warn!(?deadline, "Request deadline elapsed");
        Err(AppError::Timeout(deadline))
      }
    }
  }
}
