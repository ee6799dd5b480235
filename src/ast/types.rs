use std::fmt::Display;

/// Binary operators recognised by the parser.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LessThan,
}

impl BinaryOperator {
    /// Maps operator text to an operator, `None` for anything else.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOperator::Addition),
            "-" => Some(BinaryOperator::Subtraction),
            "*" => Some(BinaryOperator::Multiplication),
            "/" => Some(BinaryOperator::Division),
            "<" => Some(BinaryOperator::LessThan),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Multiplication => "*",
            BinaryOperator::Division => "/",
            BinaryOperator::LessThan => "<",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Return type of a function definition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReturnType {
    Int,
    Double,
    Void,
}

impl ReturnType {
    /// Resolves a return-type annotation. Unknown names fall back to `Void`.
    pub fn from_annotation(name: &str) -> Self {
        match name {
            "Int" => ReturnType::Int,
            "Double" => ReturnType::Double,
            "Void" => ReturnType::Void,
            _ => ReturnType::Void,
        }
    }
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::Int => write!(f, "Int"),
            ReturnType::Double => write!(f, "Double"),
            ReturnType::Void => write!(f, "Void"),
        }
    }
}
