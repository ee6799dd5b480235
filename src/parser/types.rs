//! Type annotation parsing.
//!
//! Only return types are resolved: `Int`, `Double` and `Void` map to their
//! `ReturnType`, and any other name is accepted as `Void`. Argument type
//! annotations are kept as plain names by the function definition parser.

use log::debug;

use crate::{ast::types::ReturnType, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

pub fn parse_return_type(parser: &mut Parser) -> Result<ReturnType, Error> {
    let error = parser.unexpected("expected a return type name");
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    let return_type = ReturnType::from_annotation(&token.value);
    if return_type == ReturnType::Void && token.value != "Void" {
        debug!(
            "Unknown return type `{}` at {}:{} treated as Void",
            token.value, token.span.start.1, token.span.start.0
        );
    }

    Ok(return_type)
}
