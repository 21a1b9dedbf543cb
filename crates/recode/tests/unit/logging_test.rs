//! Tests for log level parsing

use recode::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_invalid_level() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.is_configuration());
}
