//! Tests for error classification and messages

use recode_domain::Error;
use std::io;
use std::path::Path;

#[test]
fn test_io_error_carries_path() {
    let err = Error::io(
        "src/Main.elm",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );

    assert!(!err.is_configuration());
    assert_eq!(err.path(), Some(Path::new("src/Main.elm")));
    assert!(err.to_string().contains("src/Main.elm"));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn test_configuration_errors_are_classified() {
    assert!(Error::configuration("bad").is_configuration());
    assert!(Error::EmptyPattern { index: 0 }.is_configuration());
    assert!(
        Error::RootNotFound {
            path: "missing".into()
        }
        .is_configuration()
    );
}

#[test]
fn test_empty_pattern_message_names_rule() {
    let msg = Error::EmptyPattern { index: 3 }.to_string();
    assert!(msg.contains("#3"));
}
