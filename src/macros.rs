//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the lexer implementation:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-class tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$label` - The human-readable diagnostic label
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), String::from("integer"), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $label:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            label: $label,
            span: $span,
        }
    };
}

/// Creates a lexer handler for patterns whose whole match becomes one token.
///
/// Generates a handler function that emits a token of the given kind with
/// the matched text as its value, then advances the lexer past the match.
/// Because the token value is taken from the match, one handler covers
/// character classes like `[({]` where the lexeme varies.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$label` - The diagnostic label attached to the token
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("[({]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "OpenParen"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $label:literal) => {
        |lexer: &mut Lexer, regex: Regex| {
            let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
            lexer.push(MK_TOKEN!(
                $kind,
                matched.clone(),
                String::from($label),
                Span {
                    start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
                    end: Position(
                        (lexer.pos + matched.len() as i32) as u32,
                        Rc::clone(&lexer.file)
                    )
                }
            ));
            lexer.advance_n(matched.len() as i32);
        }
    };
}
