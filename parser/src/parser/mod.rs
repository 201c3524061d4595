mod context;
mod expression;
mod precedence;
mod statement;

pub(crate) use context::ParserContext;
