//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a list of top-level nodes. It is a recursive-descent parser using
//! precedence climbing for binary expressions and handles:
//!
//! - Function definitions with labelled, typed arguments
//! - Top-level expressions, wrapped in an implicit `main` function
//! - Calls, variables, numbers, parenthesized groups and returns
//! - Positioned errors that abort the parse
//!
//! Nesting depth is limited by `ParserOptions::max_depth`, since every
//! nested expression recurses on the call stack.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
