use std::fmt::Display;

use super::{
    expressions::{BinaryExpressionNode, CallExpressionNode, NumberNode, VariableNode},
    statements::{FunctionNode, ReturnNode},
    types::BinaryOperator,
};

/// Node Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum NodeType {
    Number,
    Variable,
    Call,
    Binary,
    Function,
    Return,
}

/// A node of the syntax tree.
///
/// Every composite node owns its children, so a tree is a plain value that
/// can be compared, cloned and moved as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(NumberNode),
    Variable(VariableNode),
    Call(CallExpressionNode),
    Binary(BinaryExpressionNode),
    Function(FunctionNode),
    Return(ReturnNode),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Number(_) => NodeType::Number,
            Node::Variable(_) => NodeType::Variable,
            Node::Call(_) => NodeType::Call,
            Node::Binary(_) => NodeType::Binary,
            Node::Function(_) => NodeType::Function,
            Node::Return(_) => NodeType::Return,
        }
    }

    pub fn number(value: f64) -> Self {
        Node::Number(NumberNode { value })
    }

    pub fn variable(identifier: impl Into<String>) -> Self {
        Node::Variable(VariableNode {
            identifier: identifier.into(),
        })
    }

    pub fn binary(operator: BinaryOperator, lhs: Node, rhs: Node) -> Self {
        Node::Binary(BinaryExpressionNode {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn as_function(&self) -> Option<&FunctionNode> {
        match self {
            Node::Function(function) => Some(function),
            _ => None,
        }
    }
}

/// Prints the node as an S-expression, e.g. `(+ a (* b c))`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(number) => write!(f, "{}", number.value),
            Node::Variable(variable) => write!(f, "{}", variable.identifier),
            Node::Call(call) => {
                write!(f, "(call {}", call.callee)?;
                for argument in &call.arguments {
                    write!(f, " {}: {}", argument.label, argument.value)?;
                }
                write!(f, ")")
            }
            Node::Binary(binary) => {
                write!(f, "({} {} {})", binary.operator, binary.lhs, binary.rhs)
            }
            Node::Function(function) => {
                write!(f, "(func {} (", function.name)?;
                for (i, argument) in function.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}: {}", argument.label, argument.type_name)?;
                }
                write!(f, ") -> {} {})", function.return_type, function.body)
            }
            Node::Return(ret) => match &ret.body {
                Some(body) => write!(f, "(return {})", body),
                None => write!(f, "(return)"),
            },
        }
    }
}

impl From<NumberNode> for Node {
    fn from(node: NumberNode) -> Self {
        Node::Number(node)
    }
}

impl From<VariableNode> for Node {
    fn from(node: VariableNode) -> Self {
        Node::Variable(node)
    }
}

impl From<CallExpressionNode> for Node {
    fn from(node: CallExpressionNode) -> Self {
        Node::Call(node)
    }
}

impl From<BinaryExpressionNode> for Node {
    fn from(node: BinaryExpressionNode) -> Self {
        Node::Binary(node)
    }
}

impl From<FunctionNode> for Node {
    fn from(node: FunctionNode) -> Self {
        Node::Function(node)
    }
}

impl From<ReturnNode> for Node {
    fn from(node: ReturnNode) -> Self {
        Node::Return(node)
    }
}
