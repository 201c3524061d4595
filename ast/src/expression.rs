use crate::node::simple_node_impl;
use crate::operator::{InfixOperation, PrefixOperation};
use crate::statement::Block;
use crate::{Identifier, Node};
use ember_span::Span;
use std::fmt;

/// Any ember expression.
///
/// This is the sum type that replaces the source's `Expression` interface:
/// one enum, matched exhaustively everywhere it's consumed (the printer, the
/// evaluator), instead of a vtable per node kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Number(Number),
    Boolean(Boolean),
    StringLiteral(StringLiteral),
    Prefix(Prefix),
    Infix(Infix),
    If(If),
    FunctionLiteral(FunctionLiteral),
    Call(Call),
    Return(Return),
    ArrayLiteral(ArrayLiteral),
    Index(Index),
    HashLiteral(HashLiteral),
    Assign(Assign),
}

impl Node for Expression {
    fn span(&self) -> Span {
        match self {
            Expression::Identifier(n) => n.span(),
            Expression::Number(n) => n.span(),
            Expression::Boolean(n) => n.span(),
            Expression::StringLiteral(n) => n.span(),
            Expression::Prefix(n) => n.span(),
            Expression::Infix(n) => n.span(),
            Expression::If(n) => n.span(),
            Expression::FunctionLiteral(n) => n.span(),
            Expression::Call(n) => n.span(),
            Expression::Return(n) => n.span(),
            Expression::ArrayLiteral(n) => n.span(),
            Expression::Index(n) => n.span(),
            Expression::HashLiteral(n) => n.span(),
            Expression::Assign(n) => n.span(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(n) => write!(f, "{n}"),
            Expression::Number(n) => write!(f, "{n}"),
            Expression::Boolean(n) => write!(f, "{n}"),
            Expression::StringLiteral(n) => write!(f, "{n}"),
            Expression::Prefix(n) => write!(f, "{n}"),
            Expression::Infix(n) => write!(f, "{n}"),
            Expression::If(n) => write!(f, "{n}"),
            Expression::FunctionLiteral(n) => write!(f, "{n}"),
            Expression::Call(n) => write!(f, "{n}"),
            Expression::Return(n) => write!(f, "{n}"),
            Expression::ArrayLiteral(n) => write!(f, "{n}"),
            Expression::Index(n) => write!(f, "{n}"),
            Expression::HashLiteral(n) => write!(f, "{n}"),
            Expression::Assign(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Number {
    pub value: i64,
    pub span: Span,
}
simple_node_impl!(Number);
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boolean {
    pub value: bool,
    pub span: Span,
}
simple_node_impl!(Boolean);
impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}
simple_node_impl!(StringLiteral);
impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prefix {
    pub operation: PrefixOperation,
    pub right: Box<Expression>,
    pub span: Span,
}
simple_node_impl!(Prefix);
impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operation, self.right)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Infix {
    pub operation: InfixOperation,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}
simple_node_impl!(Infix);
impl fmt::Display for Infix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operation, self.right)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub condition: Box<Expression>,
    pub consequence: Block,
    pub alternative: Option<Block>,
    pub span: Span,
}
simple_node_impl!(If);
impl fmt::Display for If {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, " else {alt}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: Block,
    pub span: Span,
}
simple_node_impl!(FunctionLiteral);
impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.parameters.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "fn({params}) {}", self.body)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub span: Span,
}
simple_node_impl!(Call);
impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.arguments.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "{}({args})", self.function)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Return {
    pub value: Box<Expression>,
    pub span: Span,
}
simple_node_impl!(Return);
impl fmt::Display for Return {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {}", self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub span: Span,
}
simple_node_impl!(ArrayLiteral);
impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elems = self.elements.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ");
        write!(f, "[{elems}]")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Index {
    pub container: Box<Expression>,
    pub index: Box<Expression>,
    pub span: Span,
}
simple_node_impl!(Index);
impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.container, self.index)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
    pub span: Span,
}
simple_node_impl!(HashLiteral);
impl fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.pairs.iter().map(|(k, v)| format!("{k}: {v}")).collect::<Vec<_>>().join(", ");
        write!(f, "{{{pairs}}}")
    }
}

/// An assignment `lhs = rhs`. The parser only ever builds this with an
/// `Index` expression as `target` (bare-identifier assignment isn't
/// supported), but that invariant is enforced at parse time rather than in
/// this type, so the AST stays a plain, uniformly-shaped tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
    pub span: Span,
}
simple_node_impl!(Assign);
impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.target, self.value)
    }
}
