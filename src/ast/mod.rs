/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser produces
///
/// Submodules:
/// - ast: The `Node` sum type and its printer
/// - expressions: Literal, variable, call and binary expression nodes
/// - statements: Function definition and return nodes
/// - types: Operators and return types referenced by nodes
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
