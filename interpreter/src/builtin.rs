use crate::value::{Value, NULL};
use ember_span::{sym, Symbol};
use std::rc::Rc;

/// Looks up an intrinsic by name. Consulted only after an identifier misses
/// in the environment chain -- a user binding of the same name always wins.
pub fn lookup(name: Symbol) -> Option<Value> {
    if name == *sym::len {
        Some(Value::Builtin(len))
    } else if name == *sym::first {
        Some(Value::Builtin(first))
    } else if name == *sym::last {
        Some(Value::Builtin(last))
    } else if name == *sym::rest {
        Some(Value::Builtin(rest))
    } else if name == *sym::push {
        Some(Value::Builtin(push))
    } else {
        None
    }
}

fn wrong_arity(got: usize, want: &str) -> Value {
    Value::Error(format!("wrong number of arguments. got={got}, want={want}"))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(items) => Value::Integer(items.len() as i64),
        other => Value::Error(format!("len() not supported for objects of type {}", other.type_name())),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::Array(items) => items.first().cloned().unwrap_or(NULL),
        other => Value::Error(format!("first() not supported for objects of type {}", other.type_name())),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::Array(items) => items.last().cloned().unwrap_or(NULL),
        other => Value::Error(format!("last() not supported for objects of type {}", other.type_name())),
    }
}

/// Never mutates its argument: allocates a fresh `Array` for the tail.
fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match &args[0] {
        Value::Array(items) if items.is_empty() => Value::Array(Rc::new(Vec::new())),
        Value::Array(items) => Value::Array(Rc::new(items[1..].to_vec())),
        other => Value::Error(format!("rest() not supported for objects of type {}", other.type_name())),
    }
}

/// Never mutates its argument: allocates a fresh `Array` with the extra
/// elements appended.
fn push(args: &[Value]) -> Value {
    if args.is_empty() {
        return wrong_arity(args.len(), "at least 1");
    }
    match &args[0] {
        Value::Array(items) => {
            let mut extended = (**items).clone();
            extended.extend(args[1..].iter().cloned());
            Value::Array(Rc::new(extended))
        }
        other => Value::Error(format!("push() not supported for objects of type {}", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_does_not_mutate_its_argument() {
        let original = Rc::new(vec![Value::Integer(1), Value::Integer(2)]);
        let result = push(&[Value::Array(original.clone()), Value::Integer(3)]);
        assert_eq!(original.len(), 2);
        match result {
            Value::Array(items) => assert_eq!(items.len(), 3),
            other => panic!("expected Array, got {other:?}"),
        }
    }

    #[test]
    fn len_rejects_non_string_non_array() {
        let result = len(&[Value::Integer(2)]);
        match result {
            Value::Error(message) => assert_eq!(message, "len() not supported for objects of type INTEGER"),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn first_and_last_of_empty_array_are_null() {
        let empty = Value::Array(Rc::new(Vec::new()));
        assert!(matches!(first(&[empty.clone()]), Value::Null));
        assert!(matches!(last(&[empty]), Value::Null));
    }
}
