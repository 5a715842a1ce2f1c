// ABOUTME: Environment module for managing variable bindings and the scope chain

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A lexical scope frame. Bindings are unique-keyed; `parent` is set once,
/// after construction, only when a Lambda call sets up its fresh per-call
/// frame (see `call::apply`) — it is never mutated again after that.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a new global environment with no parent.
    pub fn new_global() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Creates an independent frame containing the same bindings as `self`,
    /// with no parent set yet. Used to build a Lambda's per-call frame
    /// without mutating the Lambda's own template environment (spec.md §9).
    pub fn fork(self: &Rc<Self>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(self.bindings.borrow().clone()),
            parent: RefCell::new(None),
        })
    }

    /// Sets this frame's parent. Intended to be called exactly once, right
    /// before evaluating a Lambda's body in its fresh call frame.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Defines a binding in this frame only (used by `=` and by call
    /// argument binding). Overwrites any existing binding of the same name.
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Defines a binding in the root (global) frame of the chain (used by
    /// `def`, which always targets the global scope regardless of nesting).
    pub fn define_global(self: &Rc<Self>, name: String, value: Value) {
        self.root().define(name, value);
    }

    /// Looks up a symbol in this frame, then recursively in parent frames.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.borrow().as_ref().and_then(|p| p.get(name))
    }

    /// Walks the parent chain to the frame with no parent.
    pub fn root(self: &Rc<Self>) -> Rc<Self> {
        match self.parent.borrow().as_ref() {
            Some(parent) => parent.root(),
            None => self.clone(),
        }
    }
}
