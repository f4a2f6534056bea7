//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: '@',
            code_point: 64,
        },
        Position(10, Rc::new("test.bhai".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.bhai".to_string()));
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: '&',
            code_point: 38,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_tip_names_character_and_code_point() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: '&',
            code_point: 38,
        },
        Position(0, Rc::new("test.bhai".to_string())),
    );

    let tip = error.get_tip();
    match tip {
        ErrorTip::Suggestion(text) => {
            assert!(text.contains('&'));
            assert!(text.contains("38"));
        }
        ErrorTip::None => panic!("Expected a suggestion tip"),
    }
}

#[test]
fn test_error_impl_display() {
    let error_impl = ErrorImpl::UnrecognisedCharacter {
        character: '#',
        code_point: 35,
    };

    assert_eq!(
        error_impl.to_string(),
        "unrecognised character '#' (code point 35)"
    );
}

#[test]
fn test_null_position() {
    let pos = Position::null();
    assert_eq!(pos.0, 0);
    assert_eq!(*pos.1, "<null>");
}
