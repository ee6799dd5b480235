use log::debug;

use crate::{
    ast::{
        ast::Node,
        statements::{FunctionArgument, FunctionNode},
        types::ReturnType,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser, types::parse_return_type};

/// Name of the function that wraps top-level expressions.
pub const ENTRY_POINT: &str = "main";

/// Parses `label: Type` with an optional trailing comma.
pub fn parse_function_definition_argument(parser: &mut Parser) -> Result<FunctionArgument, Error> {
    let error = parser.unexpected("expected an argument name");
    let label = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let error = parser.unexpected("expected `:` after the argument name");
    parser.expect_error(TokenKind::Colon, Some(error))?;

    let error = parser.unexpected("expected an argument type");
    let type_name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    if parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
    }

    Ok(FunctionArgument {
        variable_name: label.clone(),
        label,
        type_name,
    })
}

/// Parses `func name(args) -> Type { expression }`.
pub fn parse_function_definition(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Func)?;

    let error = parser.unexpected("expected a function name");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::LeftParen)?;

    let mut arguments = Vec::new();
    while parser.current_token_kind() != TokenKind::RightParen {
        arguments.push(parse_function_definition_argument(parser)?);
    }

    parser.expect(TokenKind::RightParen)?;

    let error = parser.unexpected("expected `->` and a return type");
    parser.expect_error(TokenKind::Arrow, Some(error))?;

    let return_type = parse_return_type(parser)?;

    parser.expect(TokenKind::LeftBrace)?;

    let body = parse_expression(parser)?
        .ok_or_else(|| parser.unexpected("expected a function body"))?;

    let error = parser.unexpected("function bodies hold a single expression");
    parser.expect_error(TokenKind::RightBrace, Some(error))?;

    debug!("Parsed function `{}` with {} arguments", name, arguments.len());

    Ok(Node::Function(FunctionNode {
        name,
        arguments,
        return_type,
        body: Box::new(body),
    }))
}

/// Parses an expression and wraps it in the `main` entry point.
pub fn parse_top_level_expression(parser: &mut Parser) -> Result<Option<Node>, Error> {
    let Some(body) = parse_expression(parser)? else {
        return Ok(None);
    };

    Ok(Some(Node::Function(FunctionNode {
        name: String::from(ENTRY_POINT),
        arguments: vec![],
        return_type: ReturnType::Int,
        body: Box::new(body),
    })))
}
