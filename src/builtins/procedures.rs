//! List-construction procedures: cons, car, cdr, list
//!
//! `cons` follows the fixed reading of the two historically-drifting
//! iterations of its semantics: when the second argument is a list, the
//! first is prepended to it; otherwise the two arguments form a new
//! two-element list rather than a dotted pair (this interpreter has no
//! distinct dotted-pair representation).

use crate::env::Environment;
use crate::error::{LispError, ARITY_ONE, ARITY_TWO};
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_cons(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity_error("cons", ARITY_TWO, args.len()));
    }

    match &args[1] {
        Value::List(items) => {
            let mut result = Vec::with_capacity(items.len() + 1);
            result.push(args[0].clone());
            result.extend(items.iter().cloned());
            Ok(Value::List(result))
        }
        other => Ok(Value::List(vec![args[0].clone(), other.clone()])),
    }
}

pub fn builtin_car(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity_error("car", ARITY_ONE, args.len()));
    }

    match &args[0] {
        Value::List(items) if !items.is_empty() => Ok(items[0].clone()),
        Value::List(_) => Err(LispError::type_error("car", "a non-empty list", "()")),
        other => Err(LispError::type_error("car", "a list", other.type_name())),
    }
}

pub fn builtin_cdr(args: &[Value]) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity_error("cdr", ARITY_ONE, args.len()));
    }

    match &args[0] {
        Value::List(items) if !items.is_empty() => Ok(Value::List(items[1..].to_vec())),
        Value::List(_) => Err(LispError::type_error("cdr", "a non-empty list", "()")),
        other => Err(LispError::type_error("cdr", "a list", other.type_name())),
    }
}

pub fn builtin_list(args: &[Value]) -> Result<Value, LispError> {
    Ok(Value::List(args.to_vec()))
}

pub fn register(env: &Rc<Environment>) {
    env.register_procedure("cons", builtin_cons);
    env.register_procedure("car", builtin_car);
    env.register_procedure("cdr", builtin_cdr);
    env.register_procedure("list", builtin_list);
}
