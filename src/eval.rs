// ABOUTME: The tree-walking evaluator: dispatches atoms vs. applications, no TCO

use crate::env::Environment;
use crate::error::LispError;
use crate::value::{Closure, Value};
use std::rc::Rc;

/// Evaluates `expr` in `env`.
///
/// Self-evaluating atoms (numbers, strings, and already-reduced values such
/// as closures or host callables) return themselves. A symbol looks itself
/// up through the environment chain. A non-empty list either dispatches to
/// a special form bound to its head symbol — receiving its argument
/// expressions unevaluated — or evaluates head and arguments strictly
/// left to right and applies the result.
///
/// Recursion here is real Rust recursion: there is no trampoline, so
/// deeply (non-tail) recursive Lisp programs consume Rust stack frames
/// one for one.
pub fn eval(expr: &Value, env: &Rc<Environment>) -> Result<Value, LispError> {
    match expr {
        Value::Number(_)
        | Value::String(_)
        | Value::HostProcedure(_)
        | Value::HostSpecialForm(_)
        | Value::Closure(_)
        | Value::Environment(_) => Ok(expr.clone()),

        Value::Symbol(symbol) => env
            .get(symbol)
            .ok_or_else(|| LispError::UndefinedSymbol(symbol.clone())),

        Value::List(items) => {
            if items.is_empty() {
                return Ok(Value::nil());
            }

            let head = &items[0];
            let rest = &items[1..];

            if let Value::Symbol(symbol) = head {
                if let Some(Value::HostSpecialForm(form)) = env.get(symbol) {
                    return form(rest, env);
                }
            }

            let callee = eval(head, env)?;
            let mut args = Vec::with_capacity(rest.len());
            for arg_expr in rest {
                args.push(eval(arg_expr, env)?);
            }
            apply(&callee, &args)
        }
    }
}

/// Applies an already-evaluated callee to already-evaluated arguments.
/// Used both by `eval`'s application path and by the `apply` special form.
/// A closure invocation always builds a fresh child frame of its captured
/// environment; the captured frame itself is never mutated.
pub fn apply(callee: &Value, args: &[Value]) -> Result<Value, LispError> {
    match callee {
        Value::HostProcedure(f) => f(args),
        Value::Closure(closure) => apply_closure(closure, args),
        _ => Err(LispError::type_error(
            "apply",
            "a procedure or closure",
            callee.type_name(),
        )),
    }
}

fn apply_closure(closure: &Rc<Closure>, args: &[Value]) -> Result<Value, LispError> {
    if closure.params.len() != args.len() {
        return Err(LispError::arity_error(
            "closure",
            closure.params.len().to_string(),
            args.len(),
        ));
    }

    let inner = closure.env.make_inner();
    for (param, arg) in closure.params.iter().zip(args) {
        inner.set(param.clone(), arg.clone());
    }
    eval(&closure.body, &inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;
    use crate::reader::read_one;
    use crate::symbol::Symbol;

    fn eval_str(src: &str, env: &Rc<Environment>) -> Result<Value, LispError> {
        eval(&read_one(src).unwrap(), env)
    }

    fn fresh_env() -> Rc<Environment> {
        let env = Environment::new();
        register_builtins(&env);
        env
    }

    #[test]
    fn numbers_strings_self_evaluate() {
        let env = fresh_env();
        assert_eq!(eval_str("42", &env).unwrap(), Value::Number(42.0));
        assert_eq!(
            eval_str("\"hi\"", &env).unwrap(),
            Value::String("hi".to_string())
        );
    }

    #[test]
    fn symbol_lookup_and_undefined_symbol() {
        let env = fresh_env();
        env.set(Symbol::new("x"), Value::Number(5.0));
        assert_eq!(eval_str("x", &env).unwrap(), Value::Number(5.0));
        assert!(eval_str("undefined-name", &env).is_err());
    }

    #[test]
    fn empty_list_self_evaluates_to_nil() {
        let env = fresh_env();
        assert!(eval_str("()", &env).unwrap().is_nil());
    }

    #[test]
    fn define_then_lookup() {
        let env = fresh_env();
        eval_str("(define x 10)", &env).unwrap();
        assert_eq!(eval_str("x", &env).unwrap(), Value::Number(10.0));
    }

    #[test]
    fn define_function_shorthand() {
        let env = fresh_env();
        eval_str("(define (identity x) x)", &env).unwrap();
        assert_eq!(eval_str("(identity 9)", &env).unwrap(), Value::Number(9.0));
    }

    #[test]
    fn failing_define_does_not_bind_name() {
        let env = fresh_env();
        assert!(eval_str("(define y undefined-name)", &env).is_err());
        assert!(eval_str("y", &env).is_err());
    }

    #[test]
    fn if_only_evaluates_taken_branch() {
        let env = fresh_env();
        eval_str("(define (boom) (car 1))", &env).unwrap();
        let result = eval_str("(if #t 'yes (boom))", &env).unwrap();
        assert_eq!(result, Value::symbol("yes"));
    }

    #[test]
    fn if_treats_nil_as_false() {
        let env = fresh_env();
        assert_eq!(eval_str("(if '() 'a 'b)", &env).unwrap(), Value::symbol("b"));
        assert_eq!(eval_str("(if #f 'a 'b)", &env).unwrap(), Value::symbol("b"));
    }

    #[test]
    fn lambda_closes_over_defining_environment() {
        let env = fresh_env();
        eval_str("(define (make-adder n) (lambda (x) (cons n x)))", &env).unwrap();
        eval_str("(define add5 (make-adder 5))", &env).unwrap();
        let result = eval_str("(add5 10)", &env).unwrap();
        assert_eq!(
            result,
            Value::List(vec![Value::Number(5.0), Value::Number(10.0)])
        );
    }

    #[test]
    fn sibling_closures_do_not_leak_bindings() {
        let env = fresh_env();
        eval_str("(define (make-const n) (lambda () n))", &env).unwrap();
        eval_str("(define c1 (make-const 1))", &env).unwrap();
        eval_str("(define c2 (make-const 2))", &env).unwrap();
        assert_eq!(eval_str("(c1)", &env).unwrap(), Value::Number(1.0));
        assert_eq!(eval_str("(c2)", &env).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn arity_mismatch_is_an_error() {
        let env = fresh_env();
        eval_str("(define (one-arg x) x)", &env).unwrap();
        assert!(eval_str("(one-arg 1 2)", &env).is_err());
    }

    #[test]
    fn quote_prevents_evaluation() {
        let env = fresh_env();
        let result = eval_str("(quote (a b c))", &env).unwrap();
        assert_eq!(
            result,
            Value::List(vec![
                Value::symbol("a"),
                Value::symbol("b"),
                Value::symbol("c"),
            ])
        );
    }

    #[test]
    fn eval_runs_a_quoted_form_in_the_current_environment() {
        let env = fresh_env();
        let result = eval_str("(eval (list 'car (list 'quote (list 1 2))))", &env).unwrap();
        assert_eq!(result, Value::Number(1.0));
    }

    #[test]
    fn apply_spreads_an_evaluated_list_onto_a_closure() {
        let env = fresh_env();
        eval_str("(define (first-of a b) a)", &env).unwrap();
        let result = eval_str("(apply first-of (list 1 2))", &env).unwrap();
        assert_eq!(result, Value::Number(1.0));
    }

    #[test]
    fn applying_a_non_callable_is_a_type_error() {
        let env = fresh_env();
        assert!(eval_str("(5 1 2)", &env).is_err());
    }

    #[test]
    fn arguments_evaluate_left_to_right() {
        use std::cell::RefCell;
        thread_local! {
            static ORDER: RefCell<Vec<i32>> = RefCell::new(Vec::new());
        }
        fn first(_args: &[Value]) -> Result<Value, LispError> {
            ORDER.with(|o| o.borrow_mut().push(1));
            Ok(Value::Number(1.0))
        }
        fn second(_args: &[Value]) -> Result<Value, LispError> {
            ORDER.with(|o| o.borrow_mut().push(2));
            Ok(Value::Number(2.0))
        }
        let env = fresh_env();
        env.register_procedure("first", first);
        env.register_procedure("second", second);
        eval_str("(list (first) (second))", &env).unwrap();
        ORDER.with(|o| assert_eq!(*o.borrow(), vec![1, 2]));
    }
}
