//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn mismatch(expected: &str, found: &str) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
        },
        Position(0, Rc::new("test.tiny".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.tiny".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.tiny".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "ID".to_string(),
            found: "=".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_unexpected_token_error() {
    let error = mismatch("=", "5");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unexpected_token_message() {
    assert_eq!(mismatch("=", "5").to_string(), "Expected = found 5");
    assert_eq!(
        mismatch("( or INT or ID", ")").to_string(),
        "Expected ( or INT or ID found )"
    );
}

#[test]
fn test_unrecognised_token_message() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.tiny".to_string())),
    );

    assert_eq!(error.to_string(), "unrecognised token: \"@\"");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.tiny".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    match mismatch(")", "EOF").get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected `)`, found `EOF`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
