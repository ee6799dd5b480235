use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::types::BinaryOperator,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Precedence of a token that is not a binary operator. Lower than any
/// real precedence and than the minimum a climb starts from.
pub const NOT_AN_OPERATOR: i32 = -1;

pub const ADDITIVE: i32 = 20;
pub const MULTIPLICATIVE: i32 = 40;

// `<` has no entry yet
lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: HashMap<BinaryOperator, i32> = {
        let mut map = HashMap::new();
        map.insert(BinaryOperator::Addition, ADDITIVE);
        map.insert(BinaryOperator::Subtraction, ADDITIVE);
        map.insert(BinaryOperator::Multiplication, MULTIPLICATIVE);
        map.insert(BinaryOperator::Division, MULTIPLICATIVE);
        map
    };
}

/// The binary operator a token denotes, if any.
pub fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::SpacedBinaryOperator {
        return None;
    }

    BinaryOperator::from_symbol(&token.value)
}

/// Looks up how tightly `operator` binds; higher binds tighter.
///
/// # Errors
///
/// `NotImplementedError` for operators that are recognised but have no
/// precedence.
pub fn get_precedence(operator: BinaryOperator, position: Position) -> Result<i32, Error> {
    PRECEDENCE_LOOKUP.get(&operator).copied().ok_or_else(|| {
        Error::new(
            ErrorImpl::NotImplementedError {
                construct: format!("binary operator `{}`", operator),
            },
            position,
        )
    })
}

/// Precedence of `token`, or [`NOT_AN_OPERATOR`].
pub fn token_precedence(token: &Token) -> Result<i32, Error> {
    match binary_operator(token) {
        Some(operator) => get_precedence(operator, token.span.start.clone()),
        None => Ok(NOT_AN_OPERATOR),
    }
}
