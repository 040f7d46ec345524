// time_tracker/src/models/mod.rs

//! Data structures shared by the query builders, the stores and their callers.

pub mod user;
pub mod worklog;

pub use user::{NewUser, Pagination, Passport, Person, User, UserFilter, UserPatch};
pub use worklog::{Worklog, WorklogWindow};
