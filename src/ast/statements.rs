use super::{ast::Node, types::ReturnType};

/// A parameter in a function definition.
///
/// The label doubles as the name the body binds the value to. `type_name`
/// keeps the annotation text as written.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArgument {
    pub label: String,
    pub variable_name: String,
    pub type_name: String,
}

/// Function Node
/// A function definition with a single-expression body.
///
/// Top-level expressions are wrapped in a function named `main`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub name: String,
    pub arguments: Vec<FunctionArgument>,
    pub return_type: ReturnType,
    pub body: Box<Node>,
}

/// Return Node
/// `return` with an optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnNode {
    pub body: Option<Box<Node>>,
}
