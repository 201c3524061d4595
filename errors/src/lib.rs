//! Parse-time diagnostics.
//!
//! Runtime failures are *not* modeled here: they are first-class
//! `ember_interpreter::Value::Error` values (see that crate), because the
//! evaluator short-circuits on them like any other value rather than
//! propagating a Rust `Result::Err`. This crate only covers the parser,
//! which accumulates a `Vec<ParserError>` alongside a possibly-partial
//! `Program`.

use ember_span::Span;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParserError>;

/// One diagnosed parse failure, anchored at the span where it was raised.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("{span}: expected {expected} but got {got}")]
    UnexpectedToken { span: Span, expected: String, got: String },

    #[error("{span}: prefixFn not found for token {token}")]
    NoPrefixParselet { span: Span, token: String },

    #[error("{span}: infixFn not found for token {token}")]
    NoInfixParselet { span: Span, token: String },

    #[error("{span}: expected closing '{delimiter}'")]
    UnclosedDelimiter { span: Span, delimiter: &'static str },

    #[error("{span}: integer literal '{text}' does not fit in a 64-bit integer")]
    IntegerOverflow { span: Span, text: String },

    #[error("{span}: assignment target must be an index expression")]
    InvalidAssignTarget { span: Span },
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::NoPrefixParselet { span, .. }
            | ParserError::NoInfixParselet { span, .. }
            | ParserError::UnclosedDelimiter { span, .. }
            | ParserError::IntegerOverflow { span, .. }
            | ParserError::InvalidAssignTarget { span } => *span,
        }
    }
}
