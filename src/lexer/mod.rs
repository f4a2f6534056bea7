//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat sequence of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace and semicolon elision

pub mod lexer;
pub mod tokens;
