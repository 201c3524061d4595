use std::fmt;

/// A unary prefix operator: `-x` or `!x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixOperation {
    Negate,
    Not,
}

impl fmt::Display for PrefixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negate => "-",
            Self::Not => "!",
        })
    }
}

/// A binary infix operator. Precedence lives in the parser, not here --
/// by the time a tree carries one of these the precedence decision has
/// already been made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfixOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}

impl fmt::Display for InfixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        })
    }
}
