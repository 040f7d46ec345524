// time_tracker/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Passport data identifying a person. The (series, number) pair is unique across users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passport {
  pub series: String,
  pub number: String,
}

/// Personal details as returned by the people-info service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub name: String,
  pub surname: String,
  #[serde(default)]
  pub patronymic: Option<String>,
  #[serde(default)]
  pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
  pub id: i32,
  pub passport: Passport,
  pub person: Person,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Everything needed to insert a user; id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub passport: Passport,
  pub person: Person,
}

/// Sparse update of a user. Only fields that are present and non-empty are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
  pub id: i32,
  pub passport_series: Option<String>,
  pub passport_number: Option<String>,
  pub name: Option<String>,
  pub surname: Option<String>,
  pub patronymic: Option<String>,
  pub address: Option<String>,
}

impl UserPatch {
  pub fn new(id: i32) -> Self {
    Self { id, ..Default::default() }
  }

  /// True when no user-visible column would change.
  pub fn is_empty(&self) -> bool {
    [
      &self.passport_series,
      &self.passport_number,
      &self.name,
      &self.surname,
      &self.patronymic,
      &self.address,
    ]
    .into_iter()
    .all(|field| supplied(field).is_none())
  }
}

/// Exact-match filters for the user listing. Absent or empty fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
  pub name: Option<String>,
  pub surname: Option<String>,
  pub patronymic: Option<String>,
  pub address: Option<String>,
  pub passport_series: Option<String>,
  pub passport_number: Option<String>,
  /// Strict lower bound on `created_at`.
  pub created_after: Option<DateTime<Utc>>,
  /// Strict upper bound on `created_at`.
  pub created_before: Option<DateTime<Utc>>,
}

/// Zero in either field means "no bound".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
  pub limit: u32,
  pub offset: u32,
}

/// Returns the value only if it is present and non-empty.
pub(crate) fn supplied(field: &Option<String>) -> Option<&str> {
  field.as_deref().filter(|value| !value.is_empty())
}
