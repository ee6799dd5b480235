//! Parser implementation for building the syntax tree.
//!
//! This module contains the `Parser` struct, which owns the token stream and
//! the read cursor over it, and the top-level driver that turns a whole
//! token stream into a list of top-level nodes. Expressions are parsed by
//! precedence climbing in `expr.rs`; function definitions live in `stmt.rs`.

use std::rc::Rc;

use log::{debug, info, warn};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::{parse_function_definition, parse_top_level_expression};

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserOptions {
    /// Maximum number of nested expressions, counted through parentheses,
    /// call arguments, return values and function bodies.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions { max_depth: 256 }
    }
}

impl ParserOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// The main parser structure that maintains parsing state.
///
/// `pos` is the index of the next token to read. `current` is the index of
/// the token most recently read, which is the one every parsing function
/// inspects.
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Index of the next token `advance` returns
    pos: usize,
    /// Index of the most recently consumed token
    current: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    options: ParserOptions,
    /// Current expression nesting
    depth: usize,
}

impl Parser {
    /// Creates a new Parser with default options.
    ///
    /// # Errors
    ///
    /// Returns `MissingEofToken` if `tokens` is empty or its last token is
    /// not EOF.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Result<Self, Error> {
        Parser::with_options(tokens, file, ParserOptions::default())
    }

    pub fn with_options(
        tokens: Vec<Token>,
        file: Rc<String>,
        options: ParserOptions,
    ) -> Result<Self, Error> {
        match tokens.last() {
            Some(token) if token.kind == TokenKind::EOF => {}
            Some(token) => {
                return Err(Error::new(
                    ErrorImpl::MissingEofToken,
                    token.span.end.clone(),
                ))
            }
            None => return Err(Error::new(ErrorImpl::MissingEofToken, Position(0, file))),
        }

        Ok(Parser {
            tokens,
            pos: 0,
            current: 0,
            file,
            options,
            depth: 0,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Reads the next token and makes it the current token.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEndOfInput` once the EOF token has been read.
    pub fn advance(&mut self) -> Result<&Token, Error> {
        if self.pos >= self.tokens.len() {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                self.current_token().span.end.clone(),
            ));
        }

        self.current = self.pos;
        self.pos += 1;

        let token = &self.tokens[self.current];
        debug!("Read token {} ({:?})", token.kind, token.value);
        Ok(token)
    }

    /// Returns the token `offset` places past the read position without
    /// advancing. `peek(0)` is the token the next `advance` returns.
    pub fn peek(&self, offset: usize) -> Result<&Token, Error> {
        self.tokens.get(self.pos + offset).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                self.current_token().span.end.clone(),
            )
        })
    }

    /// Expects the current token to be of the specified kind, consumes it
    /// and returns it.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token().clone();

        if token.kind != expected_kind {
            return Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken { token: token.value },
                    token.span.start,
                )
            }));
        }

        self.advance()?;
        Ok(token)
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an `UnexpectedTokenDetailed` error for the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().value.clone(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Returns true until the current token is EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Enters one level of expression nesting.
    pub fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::new(
                ErrorImpl::RecursionLimitExceeded {
                    limit: self.options.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Parses the whole token stream into top-level nodes.
    ///
    /// Function definitions are returned as-is; any other expression is
    /// wrapped in a function named `main`. A position where no expression
    /// can start is skipped one token at a time. Errors abort the parse.
    pub fn parse(&mut self) -> Result<Vec<Node>, Error> {
        let mut nodes = vec![];
        let mut skipped = 0;

        self.advance()?;

        loop {
            match self.current_token_kind() {
                TokenKind::EOF => break,
                TokenKind::Func => {
                    let node = parse_function_definition(self)?;
                    debug!("Parsed top-level node {}", node);
                    nodes.push(node);
                }
                _ => match parse_top_level_expression(self)? {
                    Some(node) => {
                        debug!("Parsed top-level node {}", node);
                        nodes.push(node);
                    }
                    None => {
                        // never read past the EOF sentinel
                        if !self.has_tokens() {
                            break;
                        }

                        warn!(
                            "Skipping unparseable token {:?} at {}:{}",
                            self.current_token().value,
                            self.file,
                            self.get_position().0
                        );
                        skipped += 1;
                        self.advance()?;
                    }
                },
            }
        }

        info!(
            "Parsed {} into {} top-level nodes ({} tokens skipped)",
            self.file,
            nodes.len(),
            skipped
        );
        Ok(nodes)
    }
}

/// Parses a stream of tokens into top-level nodes.
///
/// This is the main entry point for parsing.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, terminated by EOF
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The top-level nodes in source order, or the first error encountered.
/// No partial tree is returned on error.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Vec<Node>, Error> {
    parse_with_options(tokens, file, ParserOptions::default())
}

pub fn parse_with_options(
    tokens: Vec<Token>,
    file: Rc<String>,
    options: ParserOptions,
) -> Result<Vec<Node>, Error> {
    let mut parser = Parser::with_options(tokens, file, options)?;
    parser.parse()
}
