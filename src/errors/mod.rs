//! Error types and error handling for the lexer.
//!
//! This module defines the error types used by the scanning pass. It
//! includes:
//!
//! - Error structures with source position information
//! - The unrecognised-character error raised by the scanner
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
