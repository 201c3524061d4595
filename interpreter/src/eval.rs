use crate::builtin;
use crate::environment::Env;
use crate::value::{bool_value, Value, NULL};
use ember_ast::{Expression, InfixOperation, PrefixOperation, Program, Statement};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Implemented by every node kind the evaluator walks. `eval` is the single
/// entry point named in the external interface; it dispatches by node type
/// rather than by a visitor method per AST family.
pub trait Evaluate {
    fn eval(&self, env: &Env) -> Value;
}

pub fn eval<N: Evaluate>(node: &N, env: &Env) -> Value {
    node.eval(env)
}

impl Evaluate for Program {
    fn eval(&self, env: &Env) -> Value {
        let mut result = NULL;
        for statement in &self.statements {
            result = statement.eval(env);
            if result.is_error() {
                return result;
            }
            if let Value::Return(inner) = result {
                return *inner;
            }
        }
        result
    }
}

impl Evaluate for Statement {
    fn eval(&self, env: &Env) -> Value {
        match self {
            Statement::Let(stmt) => {
                let value = stmt.value.eval(env);
                if value.is_error() {
                    return value;
                }
                env.set(stmt.name.name, value.clone());
                value
            }
            Statement::Expression(stmt) => stmt.expression.eval(env),
            Statement::Block(block) => block.eval(env),
        }
    }
}

impl Evaluate for ember_ast::Block {
    fn eval(&self, env: &Env) -> Value {
        let mut result = NULL;
        for statement in &self.statements {
            result = statement.eval(env);
            if result.is_error() || matches!(result, Value::Return(_)) {
                return result;
            }
        }
        result
    }
}

impl Evaluate for Expression {
    fn eval(&self, env: &Env) -> Value {
        match self {
            Expression::Identifier(ident) => env
                .get(ident.name)
                .or_else(|| builtin::lookup(ident.name))
                .unwrap_or_else(|| Value::Error(format!("identifier '{ident}' not defined"))),
            Expression::Number(n) => Value::Integer(n.value),
            Expression::Boolean(b) => bool_value(b.value),
            Expression::StringLiteral(s) => Value::String(Rc::new(s.value.clone())),
            Expression::Prefix(node) => eval_prefix(node.operation, node.right.eval(env)),
            Expression::Infix(node) => {
                let left = node.left.eval(env);
                if left.is_error() {
                    return left;
                }
                let right = node.right.eval(env);
                if right.is_error() {
                    return right;
                }
                eval_infix(node.operation, left, right)
            }
            Expression::If(node) => {
                let condition = node.condition.eval(env);
                if condition.is_error() {
                    return condition;
                }
                if condition.is_truthy() {
                    node.consequence.eval(env)
                } else if let Some(alternative) = &node.alternative {
                    alternative.eval(env)
                } else {
                    NULL
                }
            }
            Expression::Return(node) => {
                let value = node.value.eval(env);
                if value.is_error() {
                    return value;
                }
                Value::Return(Box::new(value))
            }
            Expression::FunctionLiteral(node) => {
                let mut seen = HashSet::new();
                for param in &node.parameters {
                    if !seen.insert(param.name) {
                        return Value::Error(format!("repeated argument \"{param}\""));
                    }
                }
                Value::Function {
                    parameters: Rc::new(node.parameters.clone()),
                    body: Rc::new(node.body.clone()),
                    env: env.clone(),
                }
            }
            Expression::Call(node) => eval_call(node, env),
            Expression::ArrayLiteral(node) => {
                let mut elements = Vec::with_capacity(node.elements.len());
                for element in &node.elements {
                    let value = element.eval(env);
                    if value.is_error() {
                        return value;
                    }
                    elements.push(value);
                }
                Value::Array(Rc::new(elements))
            }
            Expression::Index(node) => eval_index(node, env),
            Expression::HashLiteral(node) => eval_hash_literal(node, env),
            Expression::Assign(node) => eval_assign(node, env),
        }
    }
}

fn eval_prefix(operation: PrefixOperation, operand: Value) -> Value {
    if operand.is_error() {
        return operand;
    }
    match operation {
        PrefixOperation::Negate => match operand {
            Value::Integer(i) => Value::Integer(-i),
            _ => NULL,
        },
        PrefixOperation::Not => match operand {
            Value::Boolean(b) => bool_value(!b),
            Value::Integer(i) => bool_value(i <= 0),
            _ => NULL,
        },
    }
}

fn eval_infix(operation: InfixOperation, left: Value, right: Value) -> Value {
    use InfixOperation::*;
    match (&left, &right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_infix(operation, *a, *b),
        (Value::String(a), Value::String(b)) => eval_string_infix(operation, a, b),
        _ if left.type_name() != right.type_name() => {
            Value::Error(format!("type mismatch: {} {operation} {}", left.type_name(), right.type_name()))
        }
        (Value::Boolean(a), Value::Boolean(b)) => eval_equality_only(operation, a == b, left.type_name()),
        (Value::Null, Value::Null) => eval_equality_only(operation, true, left.type_name()),
        _ => Value::Error(format!("unknown operator: {} {operation} {}", left.type_name(), right.type_name())),
    }
}

fn eval_equality_only(operation: InfixOperation, equal: bool, type_name: &'static str) -> Value {
    match operation {
        InfixOperation::Equal => bool_value(equal),
        InfixOperation::NotEqual => bool_value(!equal),
        _ => Value::Error(format!("unknown operator: {type_name} {operation} {type_name}")),
    }
}

fn eval_integer_infix(operation: InfixOperation, a: i64, b: i64) -> Value {
    use InfixOperation::*;
    match operation {
        Add => Value::Integer(a.wrapping_add(b)),
        Subtract => Value::Integer(a.wrapping_sub(b)),
        Multiply => Value::Integer(a.wrapping_mul(b)),
        Divide if b == 0 => Value::Error("division by zero".into()),
        Divide => Value::Integer(a.wrapping_div(b)),
        LessThan => bool_value(a < b),
        GreaterThan => bool_value(a > b),
        Equal | NotEqual => Value::Error(format!("unknown operator: INTEGER {operation} INTEGER")),
    }
}

fn eval_string_infix(operation: InfixOperation, a: &str, b: &str) -> Value {
    match operation {
        InfixOperation::Add => Value::String(Rc::new(format!("{a}{b}"))),
        InfixOperation::Equal => bool_value(a == b),
        InfixOperation::NotEqual => bool_value(a != b),
        _ => Value::Error(format!("unknown operator: STRING {operation} STRING")),
    }
}

fn eval_call(node: &ember_ast::Call, env: &Env) -> Value {
    let callee = node.function.eval(env);
    if callee.is_error() {
        return callee;
    }

    let mut args = Vec::with_capacity(node.arguments.len());
    for argument in &node.arguments {
        let value = argument.eval(env);
        if value.is_error() {
            return value;
        }
        args.push(value);
    }

    match callee {
        Value::Function { parameters, body, env: captured } => {
            if parameters.len() != args.len() {
                return Value::Error(format!(
                    "Error invoking function: expected {} arguments but received {}",
                    parameters.len(),
                    args.len()
                ));
            }
            tracing::trace!(callee = %node.function, args = args.len(), "call");
            let call_env = captured.child();
            for (param, arg) in parameters.iter().zip(args) {
                call_env.set(param.name, arg);
            }
            match body.eval(&call_env) {
                Value::Return(inner) => {
                    tracing::trace!("return unwound at call boundary");
                    *inner
                }
                other => other,
            }
        }
        Value::Builtin(f) => f(&args),
        other => Value::Error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_index(node: &ember_ast::Index, env: &Env) -> Value {
    let container = node.container.eval(env);
    if container.is_error() {
        return container;
    }
    let index = node.index.eval(env);
    if index.is_error() {
        return index;
    }

    match &container {
        Value::Array(items) => match index {
            Value::Integer(i) if i < 0 => Value::Error("negative indices not allowed".into()),
            Value::Integer(i) if (i as usize) >= items.len() => {
                Value::Error(format!("List index out of range: {i} > {}", items.len()))
            }
            Value::Integer(i) => items[i as usize].clone(),
            _ => Value::Error("array index must be an integer".into()),
        },
        Value::Hash(map) => match index.hash_key() {
            Some(key) => map.borrow().get(&key).map(|(_, v)| v.clone()).unwrap_or(NULL),
            None => Value::Error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => Value::Error("indexing is only supported for arrays or hashes".into()),
    }
}

fn eval_hash_literal(node: &ember_ast::HashLiteral, env: &Env) -> Value {
    let mut entries = IndexMap::new();
    for (key_expr, value_expr) in &node.pairs {
        let key = key_expr.eval(env);
        if key.is_error() {
            return key;
        }
        let value = value_expr.eval(env);
        if value.is_error() {
            return value;
        }
        match key.hash_key() {
            Some(hash_key) => {
                entries.insert(hash_key, (key, value));
            }
            None => return Value::Error(format!("unusable as hash key: {}", key.type_name())),
        }
    }
    Value::Hash(Rc::new(RefCell::new(entries)))
}

fn eval_assign(node: &ember_ast::Assign, env: &Env) -> Value {
    let Expression::Index(index) = node.target.as_ref() else {
        return Value::Error("assignment target must be an index expression".into());
    };

    let container = index.container.eval(env);
    if container.is_error() {
        return container;
    }
    let key = index.index.eval(env);
    if key.is_error() {
        return key;
    }
    let value = node.value.eval(env);
    if value.is_error() {
        return value;
    }

    match &container {
        Value::Hash(map) => match key.hash_key() {
            Some(hash_key) => {
                map.borrow_mut().insert(hash_key, (key, value));
                NULL
            }
            None => Value::Error(format!("unusable as hash key: {}", key.type_name())),
        },
        _ => Value::Error("indexing is only supported for arrays or hashes".into()),
    }
}
