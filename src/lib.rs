// ABOUTME: Embeddable Lisp-1 interpreter: tokenizer, reader, evaluator, environment

pub mod builtins;
pub mod config;
pub mod env;
pub mod error;
pub mod eval;
pub mod loader;
pub mod reader;
pub mod symbol;
pub mod tokenizer;
pub mod value;

use std::rc::Rc;

/// Builds a fresh root environment with every special form, procedure,
/// predicate, and literal (`nil`, `#f`, `#t`) installed. This is the usual
/// starting point for an embedding host.
pub fn root_environment() -> Rc<env::Environment> {
    let root = env::Environment::new();
    builtins::register_builtins(&root);
    root
}

/// Reads the single expression in `source`. Part of the embedding API.
pub fn parse(source: &str) -> Result<value::Value, error::LispError> {
    reader::read_one(source)
}

/// Evaluates an already-read expression in `env`. Part of the embedding API.
pub fn eval(expr: &value::Value, env: &Rc<env::Environment>) -> Result<value::Value, error::LispError> {
    eval::eval(expr, env)
}

/// Reads and evaluates every top-level expression in `source` against
/// `env`, in source order. Part of the embedding API.
pub fn load(source: &str, env: &Rc<env::Environment>) -> loader::LoadReport {
    loader::load(source, env)
}
