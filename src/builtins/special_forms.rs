//! Special forms: define, if, lambda, quote, eval, apply
//!
//! Unlike the procedures in [`super::procedures`], these receive their
//! argument expressions unevaluated and decide for themselves what to
//! evaluate. `eval` and `apply` are special forms rather than plain
//! procedures specifically so they can reach the *calling* environment —
//! a host procedure's signature carries no environment at all, since an
//! invoked closure always evaluates its body in its own captured frame.

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::{apply, eval};
use crate::value::{Closure, Value};
use std::rc::Rc;

/// `(define name expr)` evaluates `expr` and binds `name` in the current
/// frame; if `expr` fails to evaluate, `name` is left unbound.
/// `(define (name param...) body)` is shorthand for binding `name` to a
/// closure over `body` with no preceding evaluation.
pub fn define(args: &[Value], env: &Rc<Environment>) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity_error("define", "2", args.len()));
    }

    match &args[0] {
        Value::Symbol(name) => {
            let value = eval(&args[1], env)?;
            env.set(name.clone(), value.clone());
            Ok(value)
        }
        Value::List(signature) => {
            let name = signature
                .first()
                .and_then(Value::as_symbol)
                .ok_or_else(|| LispError::type_error("define", "a symbol naming the function", "non-symbol"))?
                .clone();
            let params = parse_params("define", &signature[1..])?;
            let closure = Value::Closure(Rc::new(Closure {
                params,
                body: args[1].clone(),
                env: Rc::clone(env),
            }));
            env.set(name, closure.clone());
            Ok(closure)
        }
        other => Err(LispError::type_error(
            "define",
            "a symbol or a (name param...) signature",
            other.type_name(),
        )),
    }
}

/// `(if cond then)` or `(if cond then else)`. Evaluates only `cond` and
/// whichever branch is taken; the other branch is never evaluated. A
/// two-armed `if` whose condition is false and has no `else` yields nil.
pub fn if_form(args: &[Value], env: &Rc<Environment>) -> Result<Value, LispError> {
    if args.len() < 2 || args.len() > 3 {
        return Err(LispError::arity_error("if", "2-3", args.len()));
    }

    let condition = eval(&args[0], env)?;
    if condition.is_truthy() {
        eval(&args[1], env)
    } else if let Some(else_branch) = args.get(2) {
        eval(else_branch, env)
    } else {
        Ok(Value::nil())
    }
}

/// `(lambda (param...) body)` builds a closure over the defining
/// environment. The body is not evaluated until the closure is applied.
pub fn lambda(args: &[Value], env: &Rc<Environment>) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity_error("lambda", "2", args.len()));
    }

    let params = match &args[0] {
        Value::List(items) => parse_params("lambda", items)?,
        other => {
            return Err(LispError::type_error(
                "lambda",
                "a parameter list",
                other.type_name(),
            ))
        }
    };

    Ok(Value::Closure(Rc::new(Closure {
        params,
        body: args[1].clone(),
        env: Rc::clone(env),
    })))
}

/// `(quote expr)` returns `expr` unevaluated.
pub fn quote(args: &[Value], _env: &Rc<Environment>) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity_error("quote", "1", args.len()));
    }
    Ok(args[0].clone())
}

/// `(eval expr)` evaluates `expr` once to get a value (typically quoted
/// data), then evaluates that value again as code in the calling
/// environment.
pub fn eval_form(args: &[Value], env: &Rc<Environment>) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity_error("eval", "1", args.len()));
    }
    let data = eval(&args[0], env)?;
    eval(&data, env)
}

/// `(apply proc args)` evaluates `proc` and `args` normally, then invokes
/// `proc` with the elements of the evaluated `args` list.
pub fn apply_form(args: &[Value], env: &Rc<Environment>) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity_error("apply", "2", args.len()));
    }
    let callee = eval(&args[0], env)?;
    let spread = eval(&args[1], env)?;
    let call_args = spread
        .as_list()
        .ok_or_else(|| LispError::type_error("apply", "a list of arguments", spread.type_name()))?;
    apply(&callee, call_args)
}

fn parse_params(function: &str, items: &[Value]) -> Result<Vec<crate::symbol::Symbol>, LispError> {
    items
        .iter()
        .map(|item| {
            item.as_symbol()
                .cloned()
                .ok_or_else(|| LispError::type_error(function, "a symbol parameter name", item.type_name()))
        })
        .collect()
}

pub fn register(env: &Rc<Environment>) {
    env.register_syntax("define", define);
    env.register_syntax("if", if_form);
    env.register_syntax("lambda", lambda);
    env.register_syntax("quote", quote);
    env.register_syntax("eval", eval_form);
    env.register_syntax("apply", apply_form);
}
