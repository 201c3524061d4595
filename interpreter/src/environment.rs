use crate::value::Value;
use ember_span::Symbol;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

struct Frame {
    bindings: HashMap<Symbol, Value>,
    parent: Option<Env>,
}

/// A lexical scope: a binding map with an optional parent pointer, shared by
/// reference so a closure's captured frame outlives the statement that
/// created it. `Rc<RefCell<_>>` rather than an arena or `&'a` borrow, since
/// the evaluator is single-threaded and environments routinely form cycles
/// once a closure captures the frame it's defined in -- see the module-level
/// leak note below.
#[derive(Clone)]
pub struct Env(Rc<RefCell<Frame>>);

impl Env {
    pub fn new() -> Self {
        Env(Rc::new(RefCell::new(Frame { bindings: HashMap::new(), parent: None })))
    }

    /// A fresh child scope rooted at `self`, e.g. a function call's local
    /// frame chained onto its closure's captured environment.
    pub fn child(&self) -> Self {
        Env(Rc::new(RefCell::new(Frame { bindings: HashMap::new(), parent: Some(self.clone()) })))
    }

    /// Binds `name` in *this* frame only -- never the parent, matching
    /// `let`'s "current frame" semantics.
    pub fn set(&self, name: Symbol, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Walks the parent chain root-ward until `name` is found.
    pub fn get(&self, name: Symbol) -> Option<Value> {
        let frame = self.0.borrow();
        match frame.bindings.get(&name) {
            Some(value) => Some(value.clone()),
            None => frame.parent.as_ref().and_then(|parent| parent.get(name)),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_the_parent_chain() {
        let root = Env::new();
        root.set(Symbol::intern("x"), Value::Integer(1));
        let child = root.child();
        assert!(matches!(child.get(Symbol::intern("x")), Some(Value::Integer(1))));
    }

    #[test]
    fn set_only_writes_the_current_frame() {
        let root = Env::new();
        let child = root.child();
        child.set(Symbol::intern("y"), Value::Integer(2));
        assert!(root.get(Symbol::intern("y")).is_none());
    }

    #[test]
    fn child_binding_shadows_without_mutating_parent() {
        let root = Env::new();
        root.set(Symbol::intern("x"), Value::Integer(1));
        let child = root.child();
        child.set(Symbol::intern("x"), Value::Integer(2));
        assert!(matches!(root.get(Symbol::intern("x")), Some(Value::Integer(1))));
        assert!(matches!(child.get(Symbol::intern("x")), Some(Value::Integer(2))));
    }
}
