// time_tracker/src/models/worklog.rs

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};

/// Time spent by a user on a task. Open while `finished_at` is `None`;
/// once set, `finished_at` never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Worklog {
  pub id: i32,
  pub user_id: i32,
  pub task: String,
  pub started_at: DateTime<Utc>,
  pub finished_at: Option<DateTime<Utc>>,
}

impl Worklog {
  pub fn is_open(&self) -> bool {
    self.finished_at.is_none()
  }

  /// Elapsed time of the worklog. Open worklogs are measured up to `now`,
  /// which matches the ordering used by the listing query.
  pub fn duration_at(&self, now: DateTime<Utc>) -> Duration {
    self.finished_at.unwrap_or(now) - self.started_at
  }
}

/// Inclusive time window for listing worklogs.
///
/// Only obtainable through [`WorklogWindow::new`], so a window handed to a
/// store has already been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorklogWindow {
  start: DateTime<Utc>,
  end: DateTime<Utc>,
}

impl WorklogWindow {
  pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> TrackerResult<Self> {
    if end < start {
      return Err(TrackerError::InvalidRange { start, end });
    }
    Ok(Self { start, end })
  }

  pub fn start(&self) -> DateTime<Utc> {
    self.start
  }

  pub fn end(&self) -> DateTime<Utc> {
    self.end
  }

  /// Whether a worklog falls into the window: started at or after `start`,
  /// and either still open or finished at or before `end`.
  pub fn contains(&self, worklog: &Worklog) -> bool {
    worklog.started_at >= self.start && worklog.finished_at.map_or(true, |finished| finished <= self.end)
  }
}
