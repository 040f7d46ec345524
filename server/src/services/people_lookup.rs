// tracker_server/src/services/people_lookup.rs

//! Client for the people-info service, which resolves passport data into
//! personal details.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use time_tracker::{Passport, Person};
use tracing::{debug, instrument, warn};

#[derive(Debug, Error)]
pub enum LookupError {
  #[error("request to people info service failed: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("people info service responded with status {status}")]
  Status { status: u16 },

  #[error("failed to decode people info response: {0}")]
  Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait PeopleLookup: Send + Sync {
  /// Resolves the person registered under `passport`. Not retried.
  async fn lookup(&self, passport: &Passport) -> Result<Person, LookupError>;
}

/// [`PeopleLookup`] over HTTP: `GET <base>/info?passportSerie=..&passportNumber=..`.
#[derive(Debug, Clone)]
pub struct HttpPeopleLookup {
  client: reqwest::Client,
  base_url: String,
}

impl HttpPeopleLookup {
  pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(LookupError::Transport)?;
    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
    })
  }
}

#[async_trait]
impl PeopleLookup for HttpPeopleLookup {
  #[instrument(name = "people_lookup::lookup", skip(self, passport), fields(series = %passport.series), err(Display))]
  async fn lookup(&self, passport: &Passport) -> Result<Person, LookupError> {
    let url = format!("{}/info", self.base_url);
    debug!(%url, "fetching people info");

    let response = self
      .client
      .get(&url)
      .query(&[
        ("passportSerie", passport.series.as_str()),
        ("passportNumber", passport.number.as_str()),
      ])
      .send()
      .await
      .map_err(LookupError::Transport)?;

    let status = response.status();
    if !status.is_success() {
      warn!(status = status.as_u16(), "unexpected status from people info service");
      return Err(LookupError::Status { status: status.as_u16() });
    }

    let mut person: Person = response.json().await.map_err(LookupError::Decode)?;
    // The service sends "" for details it does not know.
    person.patronymic = person.patronymic.filter(|v| !v.is_empty());
    person.address = person.address.filter(|v| !v.is_empty());

    debug!(name = %person.name, surname = %person.surname, "fetched people info");
    Ok(person)
  }
}
