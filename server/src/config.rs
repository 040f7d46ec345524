// tracker_server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use time_tracker::DbSettings;

/// Deployment flavour; selects the logging backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
  /// Human readable output, debug level.
  Local,
  /// JSON output, debug level.
  Dev,
  /// JSON output, info level.
  Prod,
  /// No log output.
  Off,
}

impl AppEnv {
  pub fn parse(value: &str) -> Self {
    match value.trim().to_ascii_lowercase().as_str() {
      "local" => AppEnv::Local,
      "dev" => AppEnv::Dev,
      "prod" => AppEnv::Prod,
      _ => AppEnv::Off,
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub env: AppEnv,
  pub server_host: String,
  pub server_port: u16,
  pub db: DbSettings,
  /// Deadline for the store and lookup work of a single request.
  pub request_timeout: Duration,
  /// Grace period for in-flight requests on shutdown.
  pub shutdown_timeout: Duration,
  /// Base URL of the people-info service.
  pub people_api_url: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from any key/value source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str| lookup(var_name).filter(|value| !value.trim().is_empty());

    let env = get_env("APP_ENV").map_or(AppEnv::Local, |value| AppEnv::parse(&value));
    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parse_var(&get_env, "SERVER_PORT", 8080u16)?;
    let database_url = get_env("DATABASE_URL")
      .ok_or_else(|| AppError::Config("Missing environment variable 'DATABASE_URL'".to_string()))?;

    let request_timeout = Duration::from_secs(parse_var(&get_env, "REQUEST_TIMEOUT_SECS", 10u64)?);
    let shutdown_timeout = Duration::from_secs(parse_var(&get_env, "SHUTDOWN_TIMEOUT_SECS", 10u64)?);

    let external_api_port = parse_var(&get_env, "EXTERNAL_API_PORT", 8081u16)?;
    let people_api_url = get_env("PEOPLE_API_URL")
      .unwrap_or_else(|| format!("http://127.0.0.1:{}", external_api_port))
      .trim_end_matches('/')
      .to_string();

    let defaults = DbSettings::default();
    let db = DbSettings {
      url: database_url,
      max_connections: parse_var(&get_env, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
      min_connections: parse_var(&get_env, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
      idle_timeout: secs_var(&get_env, "DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout)?,
      max_lifetime: secs_var(&get_env, "DB_MAX_LIFETIME_SECS", defaults.max_lifetime)?,
      acquire_timeout: secs_var(&get_env, "DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout)?,
    };
    if db.min_connections > db.max_connections {
      return Err(AppError::Config(format!(
        "DB_MIN_CONNECTIONS ({}) exceeds DB_MAX_CONNECTIONS ({})",
        db.min_connections, db.max_connections
      )));
    }

    Ok(Self {
      env,
      server_host,
      server_port,
      db,
      request_timeout,
      shutdown_timeout,
      people_api_url,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<T>(get_env: &impl Fn(&str) -> Option<String>, var_name: &str, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match get_env(var_name) {
    Some(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e))),
    None => Ok(default),
  }
}

fn secs_var(get_env: &impl Fn(&str) -> Option<String>, var_name: &str, default: Duration) -> Result<Duration> {
  parse_var(get_env, var_name, default.as_secs()).map(Duration::from_secs)
}
