use log::trace;

use crate::{
    ast::{
        ast::Node,
        expressions::{CallArgument, CallExpressionNode, NumberNode, VariableNode},
        statements::ReturnNode,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, token_precedence},
    parser::Parser,
    stmt::parse_function_definition,
};

/// Parses a full expression: one primary followed by any binary operators.
///
/// Returns `Ok(None)` when no primary can start at the current token.
pub fn parse_expression(parser: &mut Parser) -> Result<Option<Node>, Error> {
    parser.enter()?;

    let result = match parse_primary(parser) {
        Ok(Some(lhs)) => parse_binary_operator_rhs(parser, 0, lhs),
        other => other,
    };

    parser.leave();
    result
}

/// Precedence climbing over the operators following `lhs`.
///
/// Consumes operators binding at least as tightly as `min_precedence`. When
/// the operator after a right operand binds tighter than the one before it,
/// the right operand is first extended by a nested climb. Equal precedence
/// folds to the left.
pub fn parse_binary_operator_rhs(
    parser: &mut Parser,
    min_precedence: i32,
    lhs: Node,
) -> Result<Option<Node>, Error> {
    let mut lhs = lhs;

    loop {
        let precedence = token_precedence(parser.current_token())?;
        if precedence < min_precedence {
            return Ok(Some(lhs));
        }

        let Some(operator) = binary_operator(parser.current_token()) else {
            return Ok(Some(lhs));
        };
        parser.advance()?;

        let Some(mut rhs) = parse_primary(parser)? else {
            return Ok(None);
        };

        let next_precedence = token_precedence(parser.current_token())?;
        if precedence < next_precedence {
            trace!(
                "`{}` ({}) yields its right operand to a tighter operator ({})",
                operator,
                precedence,
                next_precedence
            );

            rhs = match parse_binary_operator_rhs(parser, precedence + 1, rhs)? {
                Some(rhs) => rhs,
                None => return Ok(None),
            };
        }

        lhs = Node::binary(operator, lhs, rhs);
    }
}

/// Parses one non-binary form, dispatching on the current token.
///
/// Returns `Ok(None)` at EOF.
pub fn parse_primary(parser: &mut Parser) -> Result<Option<Node>, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_identifier_expression(parser).map(Some),
        TokenKind::IntegerLiteral | TokenKind::FloatingLiteral => parse_number(parser).map(Some),
        TokenKind::LeftParen => parse_paren(parser),
        TokenKind::Func => parse_function_definition(parser).map(Some),
        TokenKind::Return => parse_return(parser).map(Some),
        TokenKind::If => parse_if_else(parser).map(Some),
        TokenKind::EOF => Ok(None),
        TokenKind::RightParen
        | TokenKind::LeftBrace
        | TokenKind::RightBrace
        | TokenKind::Comma
        | TokenKind::Colon
        | TokenKind::Arrow
        | TokenKind::SpacedBinaryOperator
        | TokenKind::Else => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_number(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.current_token();

    if !token.is_number_literal() {
        return Err(parser.unexpected("expected a number literal"));
    }

    let value = token.value.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })?;

    parser.advance()?;
    Ok(Node::Number(NumberNode { value }))
}

/// Parses a variable reference, or a call when `(` follows the name.
///
/// Call arguments are labelled: `f(x: 1, y: 2)`.
pub fn parse_identifier_expression(parser: &mut Parser) -> Result<Node, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected("expected an identifier"));
    }

    let is_call = parser.peek(0)?.kind == TokenKind::LeftParen;
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    if !is_call {
        return Ok(Node::Variable(VariableNode { identifier }));
    }

    parser.expect(TokenKind::LeftParen)?;

    let mut arguments = vec![];
    while parser.current_token_kind() != TokenKind::RightParen {
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance()?;
        }

        let error = parser.unexpected("expected an argument label");
        let label = parser.expect_error(TokenKind::Identifier, Some(error))?.value;
        parser.expect(TokenKind::Colon)?;

        let value = parse_expression(parser)?
            .ok_or_else(|| parser.unexpected("expected an argument value"))?;

        arguments.push(CallArgument { label, value });
    }

    parser.expect(TokenKind::RightParen)?;

    Ok(Node::Call(CallExpressionNode {
        callee: identifier,
        arguments,
    }))
}

/// Parses `( expression )` and returns the inner expression.
pub fn parse_paren(parser: &mut Parser) -> Result<Option<Node>, Error> {
    parser.expect(TokenKind::LeftParen)?;

    let Some(expression) = parse_expression(parser)? else {
        return Ok(None);
    };

    let error = parser.unexpected("expected `)`");
    parser.expect_error(TokenKind::RightParen, Some(error))?;

    Ok(Some(expression))
}

/// Parses `return`, with a value when one can start at the next token.
pub fn parse_return(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Return)?;

    let body = if can_begin_expression(parser.current_token_kind()) {
        parse_expression(parser)?
    } else {
        None
    };

    Ok(Node::Return(ReturnNode {
        body: body.map(Box::new),
    }))
}

// TODO: conditional expressions once the AST has a node for them
pub fn parse_if_else(parser: &mut Parser) -> Result<Node, Error> {
    Err(Error::new(
        ErrorImpl::NotImplementedError {
            construct: String::from("if/else"),
        },
        parser.get_position(),
    ))
}

fn can_begin_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::IntegerLiteral
            | TokenKind::FloatingLiteral
            | TokenKind::LeftParen
            | TokenKind::Func
            | TokenKind::Return
            | TokenKind::If
    )
}
