// ABOUTME: Lexically-scoped environment chain: Symbol -> Value frames linked to a parent

use crate::symbol::Symbol;
use crate::value::{HostProcedure, HostSpecialForm, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A binding frame. `parent` is a strong reference: a closure that captures
/// its own defining frame keeps that frame alive for as long as the closure
/// lives, which can leak a reference cycle for a recursively-defined
/// closure. Accepted for a short-lived, single-process interpreter rather
/// than threading a `Weak` parent through every lookup.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<Symbol, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// A fresh environment with no parent — the root of a chain.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// A fresh child frame of `self`, e.g. for a closure invocation.
    pub fn make_inner(self: &Rc<Self>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(Rc::clone(self)),
        })
    }

    /// Binds `name` to `value` in this frame, shadowing (but not disturbing)
    /// any binding of the same name in an outer frame.
    pub fn set(&self, name: Symbol, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Looks up `name` in this frame, then each parent in turn.
    pub fn get(&self, name: &Symbol) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Returns the innermost frame in the chain (starting at `self`) that
    /// owns a binding for `name`, or `None` if it is unbound everywhere.
    pub fn find(self: &Rc<Self>, name: &Symbol) -> Option<Rc<Environment>> {
        if self.bindings.borrow().contains_key(name) {
            Some(Rc::clone(self))
        } else {
            self.parent.as_ref().and_then(|parent| parent.find(name))
        }
    }

    /// Registers a host procedure (pre-evaluated arguments) under `name`,
    /// part of the embedding API.
    pub fn register_procedure(&self, name: &str, f: HostProcedure) {
        self.set(Symbol::new(name), Value::HostProcedure(f));
    }

    /// Registers a host special form (raw, unevaluated arguments) under
    /// `name`, part of the embedding API.
    pub fn register_syntax(&self, name: &str, f: HostSpecialForm) {
        self.set(Symbol::new(name), Value::HostSpecialForm(f));
    }
}
