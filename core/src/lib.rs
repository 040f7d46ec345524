// src/lib.rs

//! Time tracker core: users identified by passport data, and worklogs that
//! record time spent on tasks.
//!
//! The crate provides
//!  - passport parsing ([`passport::parse`]),
//!  - pure builders for the parameterized user queries ([`query`]),
//!  - the [`UserStore`] and [`WorklogStore`] traits with a PostgreSQL
//!    implementation ([`PgStore`]),
//!  - a classified error type ([`TrackerError`], [`ErrorKind`]).

pub mod error;
pub mod models;
pub mod passport;
pub mod query;
pub mod store;

pub use crate::error::{ErrorKind, TrackerError, TrackerResult};
pub use crate::models::{NewUser, Pagination, Passport, Person, User, UserFilter, UserPatch, Worklog, WorklogWindow};
pub use crate::store::{DbSettings, PgStore, UserStore, WorklogStore};
