// tracker_server/src/web/handlers/mod.rs

pub mod user_handlers;
pub mod worklog_handlers;
