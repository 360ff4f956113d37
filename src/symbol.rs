// ABOUTME: Interned-by-value symbol type used for variable names and self-evaluating literals

use std::fmt;
use std::rc::Rc;

/// A Lisp symbol: a name compared by exact byte sequence, never case-folded.
///
/// Cloning a `Symbol` clones an `Rc`, not the underlying text, so environment
/// frames can hold many references to the same name cheaply.
#[derive(Debug, Clone, Eq)]
pub struct Symbol(Rc<str>);

impl Symbol {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::new(s)
    }
}
