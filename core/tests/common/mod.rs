// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use once_cell::sync::Lazy;
use time_tracker::{NewUser, Passport, Person, PgStore};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

const SCHEMA: &str = include_str!("../../schema.sql");

/// Connects to the scratch database named by `TEST_DATABASE_URL`, applies the
/// schema and empties both tables.
pub async fn test_store() -> PgStore {
  let url = std::env::var("TEST_DATABASE_URL")
    .expect("database tests need TEST_DATABASE_URL; run them with `cargo test -- --ignored`");

  let pool = sqlx::postgres::PgPoolOptions::new()
    .max_connections(8)
    .connect(&url)
    .await
    .expect("connect to TEST_DATABASE_URL");
  sqlx::raw_sql(SCHEMA).execute(&pool).await.expect("apply schema");
  sqlx::query("TRUNCATE worklogs, users RESTART IDENTITY CASCADE")
    .execute(&pool)
    .await
    .expect("truncate tables");

  PgStore::from_pool(pool)
}

pub fn new_user(series: &str, number: &str) -> NewUser {
  NewUser {
    passport: Passport {
      series: series.to_string(),
      number: number.to_string(),
    },
    person: Person {
      name: "Ivan".to_string(),
      surname: "Ivanov".to_string(),
      patronymic: Some("Ivanovich".to_string()),
      address: Some("Moscow, Lenina st. 5, apt. 1".to_string()),
    },
  }
}
