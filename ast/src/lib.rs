//! The typed abstract syntax tree produced by `ember-parser` and consumed by
//! `ember-interpreter`.
//!
//! Expressions and statements are each a single tagged enum (`Expression`,
//! `Statement`) rather than a family of trait objects -- the idiomatic
//! sum-type encoding of the tree-structured grammar, exhaustively matched
//! everywhere it's walked.

mod expression;
mod identifier;
mod node;
mod operator;
mod program;
mod statement;

pub use expression::{
    ArrayLiteral, Assign, Boolean, Call, Expression, FunctionLiteral, HashLiteral, If, Index, Infix, Number, Prefix,
    Return, StringLiteral,
};
pub use identifier::Identifier;
pub use node::Node;
pub use operator::{InfixOperation, PrefixOperation};
pub use program::Program;
pub use statement::{Block, ExpressionStatement, Let, Statement};
