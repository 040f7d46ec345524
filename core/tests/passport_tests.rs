// tests/passport_tests.rs
use time_tracker::passport;
use time_tracker::{ErrorKind, TrackerError};

#[test]
fn test_parse_valid_passport() {
  let parsed = passport::parse("1234 567890").unwrap();
  assert_eq!(parsed.series, "1234");
  assert_eq!(parsed.number, "567890");
}

#[test]
fn test_parse_tolerates_surrounding_whitespace() {
  let parsed = passport::parse("  1234\t567890 \n").unwrap();
  assert_eq!(parsed.series, "1234");
  assert_eq!(parsed.number, "567890");
}

#[test]
fn test_parse_rejects_malformed_input() {
  let cases = [
    "",
    "1234",
    "1234567890",
    "AB12 123456",
    "1234 56789",
    "12345 67890",
    "123 4567890",
    "1234 567890 1",
    "1234 5678ab",
    "１２３４ 567890",
  ];
  for raw in cases {
    match passport::parse(raw) {
      Err(TrackerError::InvalidFormat { input }) => assert_eq!(input, raw),
      other => panic!("expected InvalidFormat for {raw:?}, got {other:?}"),
    }
  }
}

#[test]
fn test_invalid_format_is_a_validation_error() {
  let err = passport::parse("AB12 123456").unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Validation);
  assert!(err.to_string().contains("AB12 123456"));
}

#[test]
fn test_part_validators() {
  assert!(passport::is_valid_series("0000"));
  assert!(!passport::is_valid_series("000"));
  assert!(passport::is_valid_number("123456"));
  assert!(!passport::is_valid_number("12345x"));
}
