use super::{ast::Node, types::BinaryOperator};

// LITERALS

/// Number Node
/// A numeric literal; integer and floating literals both become `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberNode {
    pub value: f64,
}

/// Variable Node
/// A reference to a named value.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableNode {
    pub identifier: String,
}

// CALLS

/// A labelled argument at a call site, as in `f(x: 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgument {
    pub label: String,
    pub value: Node,
}

/// Call Expression Node
/// Represents a call of a named function with labelled arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpressionNode {
    pub callee: String,
    pub arguments: Vec<CallArgument>,
}

// OPERATORS

/// Binary Expression Node
/// Represents `lhs operator rhs`; both operands are owned.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpressionNode {
    pub operator: BinaryOperator,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}
