// time_tracker/src/store/bind.rs

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::{Query, QueryAs};

use crate::query::SqlArg;

/// Binds [`SqlArg`]s to a prepared sqlx query in placeholder order.
pub(crate) trait BindArgs: Sized {
  fn bind_arg(self, arg: SqlArg) -> Self;

  fn bind_all(self, args: Vec<SqlArg>) -> Self {
    args.into_iter().fold(self, Self::bind_arg)
  }
}

impl<'q> BindArgs for Query<'q, Postgres, PgArguments> {
  fn bind_arg(self, arg: SqlArg) -> Self {
    match arg {
      SqlArg::Text(v) => self.bind(v),
      SqlArg::Timestamp(v) => self.bind(v),
      SqlArg::Int(v) => self.bind(v),
      SqlArg::BigInt(v) => self.bind(v),
    }
  }
}

impl<'q, O> BindArgs for QueryAs<'q, Postgres, O, PgArguments> {
  fn bind_arg(self, arg: SqlArg) -> Self {
    match arg {
      SqlArg::Text(v) => self.bind(v),
      SqlArg::Timestamp(v) => self.bind(v),
      SqlArg::Int(v) => self.bind(v),
      SqlArg::BigInt(v) => self.bind(v),
    }
  }
}
