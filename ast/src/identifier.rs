use crate::node::simple_node_impl;
use ember_span::{Span, Symbol};
use std::fmt;

/// A bare name, e.g. a binding introduced by `let` or a function parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: Symbol,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: Symbol, span: Span) -> Self {
        Self { name, span }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

simple_node_impl!(Identifier);
