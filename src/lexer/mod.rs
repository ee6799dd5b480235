//! Reference tokenizer for the language.
//!
//! The parser only consumes a token stream and does not depend on this
//! module beyond the token types. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, punctuation and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
