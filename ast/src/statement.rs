use crate::node::simple_node_impl;
use crate::{Expression, Identifier, Node};
use ember_span::Span;
use std::fmt;

/// Any ember statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Let(Let),
    Expression(ExpressionStatement),
    Block(Block),
}

impl Node for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Let(n) => n.span(),
            Statement::Expression(n) => n.span(),
            Statement::Block(n) => n.span(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(n) => write!(f, "{n}"),
            Statement::Expression(n) => write!(f, "{n}"),
            Statement::Block(n) => write!(f, "{n}"),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Clone, Debug, PartialEq)]
pub struct Let {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}
simple_node_impl!(Let);
impl fmt::Display for Let {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {}", self.name, self.value)
    }
}

/// An expression evaluated for its value (or side effect), standing alone as
/// a statement.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}
simple_node_impl!(ExpressionStatement);
impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// A brace-delimited sequence of statements, e.g. a function body or the arm
/// of an `if`. Introduces its own scope when evaluated.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}
simple_node_impl!(Block);
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        f.write_str("}")
    }
}
