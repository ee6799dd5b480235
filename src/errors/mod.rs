//! Error types and error handling for the parser.
//!
//! This module defines the single error type shared by the tokenizer and
//! the parser. It includes:
//!
//! - An error structure carrying the source position of the offending token
//! - Specific error variants for structural violations, unexpected tokens
//!   and unimplemented constructs
//! - Suggestion tips used when rendering diagnostics

pub mod errors;
