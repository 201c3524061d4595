use crate::environment::Env;
use ember_ast::{Block, Identifier};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A runtime value. Tagged variants stand in for the source's dynamic
/// dispatch: one enum, matched exhaustively by the evaluator and the
/// built-ins, instead of a family of boxed trait objects.
///
/// `Integer`/`Boolean`/`Null` are plain, `Copy`-cheap payloads; `String`,
/// `Array`, `Function` and `Hash` are `Rc`-backed so cloning a `Value` (which
/// the evaluator does constantly, e.g. returning a looked-up binding) never
/// deep-copies the underlying data.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Rc<String>),
    Null,
    /// Internal sentinel wrapping a `return`ed value. Never observable
    /// outside the evaluator: it is unwrapped exactly once, at the call
    /// boundary that receives it (or at the program root).
    Return(Box<Value>),
    Error(String),
    Function { parameters: Rc<Vec<Identifier>>, body: Rc<Block>, env: Env },
    Builtin(BuiltinFn),
    Array(Rc<Vec<Value>>),
    Hash(Rc<RefCell<IndexMap<HashKey, (Value, Value)>>>),
}

pub type BuiltinFn = fn(&[Value]) -> Value;

/// `TRUE`/`FALSE`/`NULL` are exactly `Value::Boolean`/`Value::Null` --
/// variants with no heap payload, so a plain `const` gives the "process-wide
/// singleton" the evaluator wants without requiring `Value` as a whole to be
/// `Sync` (it isn't: `Array`/`Hash`/`Function` carry an `Rc`).
pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

pub fn bool_value(b: bool) -> Value {
    if b {
        TRUE
    } else {
        FALSE
    }
}

/// A structural key for `Hash` storage: a tag plus the keying value's
/// canonical bytes. This stands in for the source's MD5-of-printed-form
/// approach -- it preserves exact `==` semantics without pulling in a
/// cryptographic hash dependency the rest of this crate has no other use
/// for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl Value {
    /// `None` for types that aren't valid hash keys (arrays, hashes,
    /// functions, ...).
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(i) => Some(HashKey::Integer(*i)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::String(s) => Some(HashKey::String((**s).clone())),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Anything other than the `false` and `null` singletons is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN",
            Value::Error(_) => "ERROR",
            Value::Function { .. } => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Null => write!(f, "null"),
            Value::Return(inner) => write!(f, "{inner}"),
            Value::Error(message) => write!(f, "{message}"),
            Value::Function { parameters, body, .. } => {
                let params = parameters.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "fn({params}) {body}")
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Array(items) => {
                let elems = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "[{elems}]")
            }
            Value::Hash(map) => {
                let pairs =
                    map.borrow().values().map(|(k, v)| format!("{k}: {v}")).collect::<Vec<_>>().join(", ");
                write!(f, "{{{pairs}}}")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_excludes_only_false_and_null() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::String(Rc::new(String::new())).is_truthy());
        assert!(!FALSE.is_truthy());
        assert!(!NULL.is_truthy());
        assert!(TRUE.is_truthy());
    }

    #[test]
    fn hash_key_is_none_for_non_keyable_values() {
        assert!(Value::Array(Rc::new(vec![])).hash_key().is_none());
        assert_eq!(Value::Integer(7).hash_key(), Some(HashKey::Integer(7)));
    }
}
