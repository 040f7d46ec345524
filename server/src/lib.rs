// tracker_server/src/lib.rs

//! HTTP adapter for the time tracker: configuration, logging bootstrap, the
//! people-info client and the actix-web routes.

pub mod config;
pub mod errors;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod web;
