use std::{collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A lexical scope: a bindings table with an optional parent.
///
/// Lookup walks from the innermost scope towards the root; a child never
/// writes into a parent. All bindings for a frame are supplied when the frame
/// is created (one frame per function invocation), so a scope is immutable
/// for its whole lifetime and can be shared freely between the closures that
/// captured it.
#[derive(Debug)]
pub struct Scope {
    parent:   Option<Rc<Scope>>,
    bindings: HashMap<String, Value>,
}

impl Scope {
    /// Creates the root scope from the global bindings table.
    #[must_use]
    pub fn root(bindings: HashMap<String, Value>) -> Rc<Self> {
        Rc::new(Self { parent: None,
                       bindings })
    }

    /// Creates a child scope chained onto `parent`.
    ///
    /// Used once per function invocation, binding the parameters over the
    /// closure's captured scope.
    #[must_use]
    pub fn child(parent: &Rc<Self>, bindings: HashMap<String, Value>) -> Rc<Self> {
        Rc::new(Self { parent: Some(Rc::clone(parent)),
                       bindings, })
    }

    /// Resolves a name against this scope chain.
    ///
    /// Returns the innermost binding, or `None` if no scope binds the name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut current = self;
        loop {
            if let Some(value) = current.bindings.get(name) {
                return Some(value.clone());
            }
            match &current.parent {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }
}
