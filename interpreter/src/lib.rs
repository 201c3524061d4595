//! Tree-walking evaluator for the ember language: runtime values, lexical
//! environments, built-in functions and the recursive evaluation pass over
//! the AST produced by `ember-parser`.

mod builtin;
mod environment;
mod eval;
mod value;

pub use environment::Env;
pub use eval::{eval, Evaluate};
pub use value::{bool_value, HashKey, Value, BuiltinFn, FALSE, NULL, TRUE};
