// time_tracker/src/query/mod.rs

//! Pure construction of parameterized SQL for the user operations.
//!
//! Builders first collect typed pieces (conditions, assignments, bounds) and
//! then render them in a single pass. Each argument's `$n` placeholder is
//! taken from its position in the argument list at the moment it is pushed,
//! so the emitted text and [`BuiltQuery::args`] cannot drift apart.

pub mod params;
pub mod users;

pub use params::{BuiltQuery, SqlArg};
pub use users::{list_users_query, update_user_query, USER_COLUMNS};
