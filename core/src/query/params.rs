// time_tracker/src/query/params.rs

use chrono::{DateTime, Utc};

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlArg {
  Text(String),
  Timestamp(DateTime<Utc>),
  Int(i32),
  BigInt(i64),
}

/// Query text plus the arguments for its `$1..$n` placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
  pub sql: String,
  pub args: Vec<SqlArg>,
}

impl BuiltQuery {
  /// Position (1-based, as in `$n`) of the first argument equal to `arg`.
  pub fn placeholder_of(&self, arg: &SqlArg) -> Option<usize> {
    self.args.iter().position(|a| a == arg).map(|i| i + 1)
  }
}

/// Accumulates arguments during rendering and hands out their placeholders.
#[derive(Debug, Default)]
pub(crate) struct Params {
  args: Vec<SqlArg>,
}

impl Params {
  /// Appends `arg` and returns the placeholder that refers to it.
  pub(crate) fn push(&mut self, arg: SqlArg) -> String {
    self.args.push(arg);
    format!("${}", self.args.len())
  }

  pub(crate) fn finish(self, sql: String) -> BuiltQuery {
    BuiltQuery { sql, args: self.args }
  }
}
