// time_tracker/src/query/users.rs

use crate::models::user::supplied;
use crate::models::{Pagination, UserFilter, UserPatch};
use crate::query::params::{BuiltQuery, Params, SqlArg};

/// Column list shared by every query that materializes a [`crate::models::User`].
pub const USER_COLUMNS: &str =
  "id, passport_series, passport_number, name, surname, patronymic, address, created_at, updated_at";

/// One `column <op> $n` predicate, kept unrendered until the final pass.
struct Condition {
  column: &'static str,
  op: &'static str,
  arg: SqlArg,
}

/// Builds the user listing query.
///
/// Every supplied string field becomes an equality predicate, `created_after`
/// and `created_before` become strict bounds on `created_at`, and positive
/// `limit` / `offset` values become `LIMIT` / `OFFSET`. Rows are ordered by id
/// so that consecutive pages do not overlap.
pub fn list_users_query(filter: &UserFilter, page: &Pagination) -> BuiltQuery {
  let text_fields = [
    ("name", &filter.name),
    ("surname", &filter.surname),
    ("patronymic", &filter.patronymic),
    ("address", &filter.address),
    ("passport_series", &filter.passport_series),
    ("passport_number", &filter.passport_number),
  ];

  let mut conditions: Vec<Condition> = text_fields
    .into_iter()
    .filter_map(|(column, value)| {
      supplied(value).map(|value| Condition {
        column,
        op: "=",
        arg: SqlArg::Text(value.to_string()),
      })
    })
    .collect();

  if let Some(after) = filter.created_after {
    conditions.push(Condition {
      column: "created_at",
      op: ">",
      arg: SqlArg::Timestamp(after),
    });
  }
  if let Some(before) = filter.created_before {
    conditions.push(Condition {
      column: "created_at",
      op: "<",
      arg: SqlArg::Timestamp(before),
    });
  }

  let mut params = Params::default();
  let mut sql = format!("SELECT {USER_COLUMNS} FROM users");

  if !conditions.is_empty() {
    let predicates: Vec<String> = conditions
      .into_iter()
      .map(|c| format!("{} {} {}", c.column, c.op, params.push(c.arg)))
      .collect();
    sql.push_str(" WHERE ");
    sql.push_str(&predicates.join(" AND "));
  }

  sql.push_str(" ORDER BY id");

  if page.limit > 0 {
    let placeholder = params.push(SqlArg::BigInt(i64::from(page.limit)));
    sql.push_str(&format!(" LIMIT {placeholder}"));
  }
  if page.offset > 0 {
    let placeholder = params.push(SqlArg::BigInt(i64::from(page.offset)));
    sql.push_str(&format!(" OFFSET {placeholder}"));
  }

  params.finish(sql)
}

/// Builds the partial update for a user.
///
/// Only supplied fields are assigned; `updated_at` is always refreshed, so the
/// statement is never empty even for a patch with no visible changes. The id
/// is the last argument.
pub fn update_user_query(patch: &UserPatch) -> BuiltQuery {
  let fields = [
    ("passport_series", &patch.passport_series),
    ("passport_number", &patch.passport_number),
    ("name", &patch.name),
    ("surname", &patch.surname),
    ("patronymic", &patch.patronymic),
    ("address", &patch.address),
  ];

  let mut params = Params::default();
  let mut assignments: Vec<String> = fields
    .into_iter()
    .filter_map(|(column, value)| supplied(value).map(|value| (column, value)))
    .map(|(column, value)| format!("{column} = {}", params.push(SqlArg::Text(value.to_string()))))
    .collect();
  assignments.push("updated_at = NOW()".to_string());

  let id = params.push(SqlArg::Int(patch.id));
  let sql = format!("UPDATE users SET {} WHERE id = {id}", assignments.join(", "));

  params.finish(sql)
}
