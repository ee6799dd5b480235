//! Unit tests for the parser module.
//!
//! Covers operator precedence and associativity, primaries, calls,
//! function definitions, the top-level driver, the cursor and error cases.

use std::rc::Rc;

use crate::{
    ast::{
        ast::Node,
        expressions::{CallArgument, CallExpressionNode},
        statements::{FunctionArgument, FunctionNode, ReturnNode},
        types::{BinaryOperator, ReturnType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Span,
};

use super::parser::{parse, parse_with_options, Parser, ParserOptions};

fn file() -> Rc<String> {
    Rc::new("test.mini".to_string())
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token::new(kind, value, Span::null())
}

fn parse_source(source: &str) -> Result<Vec<Node>, Error> {
    let tokens = tokenize(source.to_string(), Some("test.mini".to_string()))?;
    parse(tokens, file())
}

/// Parses a single top-level expression and returns the body of `main`.
fn main_body(source: &str) -> Node {
    let nodes = parse_source(source).unwrap();
    assert_eq!(nodes.len(), 1);

    let main = nodes[0].as_function().unwrap();
    assert_eq!(main.name, "main");
    assert!(main.arguments.is_empty());
    assert_eq!(main.return_type, ReturnType::Int);

    (*main.body).clone()
}

fn var(name: &str) -> Node {
    Node::variable(name)
}

fn num(value: f64) -> Node {
    Node::number(value)
}

fn add(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinaryOperator::Addition, lhs, rhs)
}

fn sub(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinaryOperator::Subtraction, lhs, rhs)
}

fn mul(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinaryOperator::Multiplication, lhs, rhs)
}

fn div(lhs: Node, rhs: Node) -> Node {
    Node::binary(BinaryOperator::Division, lhs, rhs)
}

fn int_argument(name: &str) -> FunctionArgument {
    FunctionArgument {
        label: name.to_string(),
        variable_name: name.to_string(),
        type_name: "Int".to_string(),
    }
}

fn error_kind(source: &str) -> ErrorImpl {
    parse_source(source).unwrap_err().kind().clone()
}

// PRECEDENCE

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(main_body("a + b * c"), add(var("a"), mul(var("b"), var("c"))));
}

#[test]
fn test_leading_multiplication() {
    assert_eq!(main_body("a * b + c"), add(mul(var("a"), var("b")), var("c")));
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(main_body("a - b - c"), sub(sub(var("a"), var("b")), var("c")));
}

#[test]
fn test_equal_precedence_folds_left() {
    assert_eq!(main_body("a / b * c"), mul(div(var("a"), var("b")), var("c")));
    assert_eq!(
        main_body("1 + 2 - 3 + 4"),
        add(sub(add(num(1.0), num(2.0)), num(3.0)), num(4.0))
    );
}

#[test]
fn test_climb_returns_to_lower_precedence() {
    assert_eq!(
        main_body("a + b * c - d"),
        sub(add(var("a"), mul(var("b"), var("c"))), var("d"))
    );
    assert_eq!(
        main_body("a - b * c * d + e"),
        add(
            sub(var("a"), mul(mul(var("b"), var("c")), var("d"))),
            var("e")
        )
    );
}

#[test]
fn test_parenthesized_expression() {
    assert_eq!(main_body("(a + b) * c"), mul(add(var("a"), var("b")), var("c")));
    assert_eq!(main_body("a * (b + c)"), mul(var("a"), add(var("b"), var("c"))));
    assert_eq!(main_body("((a))"), var("a"));
}

#[test]
fn test_less_than_is_not_implemented() {
    assert!(matches!(
        error_kind("a < b"),
        ErrorImpl::NotImplementedError { .. }
    ));
    // also when it only appears as the operator after a right operand
    assert!(matches!(
        error_kind("a + b < c"),
        ErrorImpl::NotImplementedError { .. }
    ));
}

#[test]
fn test_unknown_operator_text_ends_the_expression() {
    let tokens = vec![
        token(TokenKind::Identifier, "a"),
        token(TokenKind::SpacedBinaryOperator, "%"),
        token(TokenKind::Identifier, "b"),
        token(TokenKind::EOF, "EOF"),
    ];

    // `a` ends before `%`, which cannot start a new expression
    let error = parse(tokens, file()).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorImpl::UnexpectedToken {
            token: "%".to_string()
        }
    );
}

// PRIMARIES

#[test]
#[allow(clippy::approx_constant)]
fn test_floating_literal() {
    let tokens = vec![
        token(TokenKind::FloatingLiteral, "3.14"),
        token(TokenKind::EOF, "EOF"),
    ];

    let nodes = parse(tokens, file()).unwrap();
    assert_eq!(*nodes[0].as_function().unwrap().body, num(3.14));
}

#[test]
fn test_integer_literal() {
    assert_eq!(main_body("42"), num(42.0));
}

#[test]
fn test_malformed_number() {
    let tokens = vec![
        token(TokenKind::IntegerLiteral, "1_000"),
        token(TokenKind::EOF, "EOF"),
    ];

    let error = parse(tokens, file()).unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorImpl::NumberParseError {
            token: "1_000".to_string()
        }
    );
}

#[test]
fn test_call_with_labelled_arguments() {
    assert_eq!(
        main_body("f(x: 1, y: 2)"),
        Node::Call(CallExpressionNode {
            callee: "f".to_string(),
            arguments: vec![
                CallArgument {
                    label: "x".to_string(),
                    value: num(1.0),
                },
                CallArgument {
                    label: "y".to_string(),
                    value: num(2.0),
                },
            ],
        })
    );
}

#[test]
fn test_call_without_arguments() {
    assert_eq!(
        main_body("f()"),
        Node::Call(CallExpressionNode {
            callee: "f".to_string(),
            arguments: vec![],
        })
    );
}

#[test]
fn test_call_arguments_are_full_expressions() {
    let body = main_body("f(x: g(y: 1) + 2 * z) - 1");

    assert_eq!(body.to_string(), "(- (call f x: (+ (call g y: 1) (* 2 z))) 1)");
}

#[test]
fn test_call_requires_labels() {
    let kind = error_kind("f(1)");

    assert_eq!(
        kind,
        ErrorImpl::UnexpectedTokenDetailed {
            token: "1".to_string(),
            message: "expected an argument label".to_string(),
        }
    );
}

#[test]
fn test_unclosed_call() {
    assert!(parse_source("f(x: 1").is_err());
}

#[test]
fn test_unclosed_paren() {
    let kind = error_kind("(1 + 2");

    assert_eq!(
        kind,
        ErrorImpl::UnexpectedTokenDetailed {
            token: "EOF".to_string(),
            message: "expected `)`".to_string(),
        }
    );
}

#[test]
fn test_if_is_not_implemented() {
    assert_eq!(
        error_kind("if a"),
        ErrorImpl::NotImplementedError {
            construct: "if/else".to_string()
        }
    );
}

#[test]
fn test_top_level_return() {
    assert_eq!(
        main_body("return 5"),
        Node::Return(ReturnNode {
            body: Some(Box::new(num(5.0)))
        })
    );
    assert_eq!(main_body("return"), Node::Return(ReturnNode { body: None }));
}

// FUNCTION DEFINITIONS

#[test]
fn test_function_definition() {
    let nodes = parse_source("func add(a: Int, b: Int) -> Int { a + b }").unwrap();

    assert_eq!(
        nodes,
        vec![Node::Function(FunctionNode {
            name: "add".to_string(),
            arguments: vec![int_argument("a"), int_argument("b")],
            return_type: ReturnType::Int,
            body: Box::new(add(var("a"), var("b"))),
        })]
    );
}

#[test]
fn test_function_without_arguments() {
    let nodes = parse_source("func two() -> Double { 2.0 }").unwrap();
    let function = nodes[0].as_function().unwrap();

    assert_eq!(function.name, "two");
    assert!(function.arguments.is_empty());
    assert_eq!(function.return_type, ReturnType::Double);
    assert_eq!(*function.body, num(2.0));
}

#[test]
fn test_argument_types_are_kept() {
    let nodes = parse_source("func scale(by: Double) -> Double { by * 2 }").unwrap();
    let function = nodes[0].as_function().unwrap();

    assert_eq!(function.arguments[0].label, "by");
    assert_eq!(function.arguments[0].variable_name, "by");
    assert_eq!(function.arguments[0].type_name, "Double");
}

#[test]
fn test_unknown_return_type_is_void() {
    let nodes = parse_source("func name() -> String { 1 }").unwrap();

    assert_eq!(nodes[0].as_function().unwrap().return_type, ReturnType::Void);
}

#[test]
fn test_function_returning_nothing() {
    let nodes = parse_source("func nothing() -> Void { return }").unwrap();
    let function = nodes[0].as_function().unwrap();

    assert_eq!(function.return_type, ReturnType::Void);
    assert_eq!(*function.body, Node::Return(ReturnNode { body: None }));
}

#[test]
fn test_function_returning_value() {
    let nodes = parse_source("func three() -> Int { return 1 + 2 }").unwrap();

    assert_eq!(
        *nodes[0].as_function().unwrap().body,
        Node::Return(ReturnNode {
            body: Some(Box::new(add(num(1.0), num(2.0))))
        })
    );
}

#[test]
fn test_nested_function_definition() {
    let nodes = parse_source("func outer() -> Int { func inner() -> Int { 1 } }").unwrap();
    let outer = nodes[0].as_function().unwrap();
    let inner = outer.body.as_function().unwrap();

    assert_eq!(inner.name, "inner");
    assert_eq!(*inner.body, num(1.0));
}

#[test]
fn test_missing_right_paren_after_arguments() {
    let result = parse_source("func add(a: Int, b: Int -> Int { a + b }");

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_missing_right_paren_in_token_stream() {
    let tokens = vec![
        token(TokenKind::Func, "func"),
        token(TokenKind::Identifier, "f"),
        token(TokenKind::LeftParen, "("),
        token(TokenKind::Arrow, "->"),
        token(TokenKind::Identifier, "Int"),
        token(TokenKind::LeftBrace, "{"),
        token(TokenKind::IntegerLiteral, "1"),
        token(TokenKind::RightBrace, "}"),
        token(TokenKind::EOF, "EOF"),
    ];

    assert!(parse(tokens, file()).is_err());
}

#[test]
fn test_missing_arrow() {
    let error = parse_source("func f() Int { 1 }").unwrap_err();

    assert_eq!(
        *error.kind(),
        ErrorImpl::UnexpectedTokenDetailed {
            token: "Int".to_string(),
            message: "expected `->` and a return type".to_string(),
        }
    );
    assert_eq!(error.get_position().0, 9);
    assert_eq!(*error.get_position().1, "test.mini");
}

#[test]
fn test_argument_requires_type() {
    assert!(parse_source("func f(a) -> Int { a }").is_err());
    assert!(parse_source("func f(a:) -> Int { a }").is_err());
}

#[test]
fn test_empty_body() {
    assert_eq!(
        error_kind("func f() -> Int { }"),
        ErrorImpl::UnexpectedToken {
            token: "}".to_string()
        }
    );
}

#[test]
fn test_body_holds_one_expression() {
    assert!(matches!(
        error_kind("func f() -> Int { 1 2 }"),
        ErrorImpl::UnexpectedTokenDetailed { .. }
    ));
}

#[test]
fn test_truncated_definition() {
    assert!(parse_source("func f(a: Int").is_err());
    assert!(parse_source("func").is_err());
}

// DRIVER

#[test]
fn test_top_level_expression_becomes_main() {
    let nodes = parse_source("1 + 2").unwrap();

    assert_eq!(
        nodes,
        vec![Node::Function(FunctionNode {
            name: "main".to_string(),
            arguments: vec![],
            return_type: ReturnType::Int,
            body: Box::new(add(num(1.0), num(2.0))),
        })]
    );
}

#[test]
fn test_definitions_and_expressions_in_order() {
    let nodes = parse_source("func one() -> Int { 1 }\none()\n2 3").unwrap();
    let printed: Vec<String> = nodes.iter().map(|node| node.to_string()).collect();

    assert_eq!(
        printed,
        vec![
            "(func one () -> Int 1)",
            "(func main () -> Int (call one))",
            "(func main () -> Int 2)",
            "(func main () -> Int 3)",
        ]
    );
}

#[test]
fn test_empty_input() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse_source("// nothing here").unwrap().is_empty());
}

#[test]
fn test_dangling_operator_is_dropped() {
    assert!(parse_source("1 +").unwrap().is_empty());
    assert!(parse_source("(1 +").unwrap().is_empty());
}

#[test]
fn test_error_aborts_whole_parse() {
    // the valid definition before the error is not returned
    assert!(parse_source("func one() -> Int { 1 } )").is_err());
}

#[test]
fn test_recursion_limit() {
    let source = "((((((((1))))))))";
    let tokens = tokenize(source.to_string(), None).unwrap();

    let error = parse_with_options(
        tokens.clone(),
        file(),
        ParserOptions::default().with_max_depth(4),
    )
    .unwrap_err();
    assert_eq!(
        *error.kind(),
        ErrorImpl::RecursionLimitExceeded { limit: 4 }
    );

    assert_eq!(parse(tokens, file()).unwrap().len(), 1);
}

// CURSOR

#[test]
fn test_peek_matches_advance() {
    let tokens = tokenize("func add(a: Int) -> Int { a * (2 + x) }".to_string(), None).unwrap();
    let count = tokens.len();
    let mut parser = Parser::new(tokens, file()).unwrap();

    for _ in 0..count {
        let peeked = parser.peek(0).unwrap().clone();
        let advanced = parser.advance().unwrap().clone();
        assert_eq!(peeked, advanced);
        assert_eq!(*parser.current_token(), advanced);
    }

    assert!(parser.peek(0).is_err());
}

#[test]
fn test_peek_offset() {
    let tokens = tokenize("a b c".to_string(), None).unwrap();
    let mut parser = Parser::new(tokens, file()).unwrap();

    assert_eq!(parser.peek(2).unwrap().value, "c");
    parser.advance().unwrap();
    assert_eq!(parser.peek(0).unwrap().value, "b");
    assert_eq!(parser.peek(2).unwrap().kind, TokenKind::EOF);
    assert!(parser.peek(3).is_err());
}

#[test]
fn test_advance_past_eof() {
    let mut parser = Parser::new(vec![token(TokenKind::EOF, "EOF")], file()).unwrap();

    assert_eq!(parser.advance().unwrap().kind, TokenKind::EOF);
    assert!(!parser.has_tokens());

    let error = parser.advance().unwrap_err();
    assert_eq!(*error.kind(), ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_stream_must_end_with_eof() {
    let error = Parser::new(vec![], file()).err().unwrap();
    assert_eq!(*error.kind(), ErrorImpl::MissingEofToken);

    let error = parse(vec![token(TokenKind::Identifier, "a")], file()).unwrap_err();
    assert_eq!(*error.kind(), ErrorImpl::MissingEofToken);
}

#[test]
fn test_expect() {
    let tokens = tokenize("( )".to_string(), None).unwrap();
    let mut parser = Parser::new(tokens, file()).unwrap();
    parser.advance().unwrap();

    assert!(parser.expect(TokenKind::RightParen).is_err());
    assert_eq!(parser.expect(TokenKind::LeftParen).unwrap().value, "(");
    assert_eq!(parser.current_token_kind(), TokenKind::RightParen);
}
