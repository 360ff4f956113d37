//! Built-in special forms and procedures.
//!
//! - [`special_forms`] (6): define, if, lambda, quote, eval, apply
//! - [`procedures`] (4): cons, car, cdr, list
//! - [`predicates`] (6): eq?, list?, string?, number?, symbol?, callable?
//!
//! Each sub-module owns a `register(env)` that installs its own bindings;
//! [`register_builtins`] also installs the three canonical literals
//! (`nil`, `#f`, `#t`).

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub mod predicates;
pub mod procedures;
pub mod special_forms;

pub use predicates::register as register_predicates;
pub use procedures::register as register_procedures;
pub use special_forms::register as register_special_forms;

/// Registers every special form and procedure, plus the `nil`/`#f`/`#t`
/// literal bindings, into `env`.
pub fn register_builtins(env: &Rc<Environment>) {
    register_special_forms(env);
    register_procedures(env);
    register_predicates(env);

    env.set(crate::symbol::Symbol::new("nil"), Value::nil());
    env.set(crate::symbol::Symbol::new("#f"), Value::nil());
    env.set(crate::symbol::Symbol::new("#t"), Value::symbol("#t"));
}
