// time_tracker/src/passport.rs

//! Parsing of raw passport strings such as `"1234 567890"`.

use crate::error::{TrackerError, TrackerResult};
use crate::models::Passport;

pub const SERIES_LEN: usize = 4;
pub const NUMBER_LEN: usize = 6;

/// Parses `"<series> <number>"` into a [`Passport`].
///
/// The input must split on whitespace into exactly two tokens, the first being
/// four digits and the second six digits. Anything else is `InvalidFormat`.
pub fn parse(raw: &str) -> TrackerResult<Passport> {
  let invalid = || TrackerError::InvalidFormat { input: raw.to_string() };

  let mut tokens = raw.split_whitespace();
  let (Some(series), Some(number), None) = (tokens.next(), tokens.next(), tokens.next()) else {
    return Err(invalid());
  };

  if !is_valid_series(series) || !is_valid_number(number) {
    return Err(invalid());
  }

  Ok(Passport {
    series: series.to_string(),
    number: number.to_string(),
  })
}

pub fn is_valid_series(series: &str) -> bool {
  is_digits_of_len(series, SERIES_LEN)
}

pub fn is_valid_number(number: &str) -> bool {
  is_digits_of_len(number, NUMBER_LEN)
}

fn is_digits_of_len(token: &str, len: usize) -> bool {
  token.len() == len && token.bytes().all(|b| b.is_ascii_digit())
}
