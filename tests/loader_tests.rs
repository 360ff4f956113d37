// ABOUTME: Cross-module scenarios for the loader's REPL echo protocol and the embedding API

use lisp_sandbox::error::LispError;
use lisp_sandbox::value::Value;
use lisp_sandbox::{load, root_environment};

#[test]
fn empty_program_loads_with_no_entries_and_no_error() {
    let env = root_environment();
    let report = load("", &env);
    assert!(report.is_ok());
    assert!(report.entries.is_empty());
    assert_eq!(format!("{}", report), "");
}

#[test]
fn echo_protocol_prints_input_then_arrow_result_per_expression() {
    let env = root_environment();
    let report = load("(define x 1) (list x x)", &env);
    let text = format!("{}", report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["(define x 1)", "=> 1", "(list x x)", "=> (1 1)"]);
}

#[test]
fn an_evaluation_error_does_not_stop_later_top_level_expressions() {
    let env = root_environment();
    let report = load("(car 1) (define ok 'fine) ok", &env);
    assert!(!report.is_ok());
    assert_eq!(report.entries.len(), 3);
    assert!(report.entries[0].outcome.is_err());
    assert_eq!(report.entries[2].outcome.as_ref().unwrap(), &Value::symbol("fine"));
}

#[test]
fn a_read_error_aborts_the_remainder_of_the_source() {
    let env = root_environment();
    let report = load("(define x 1) (unclosed 1 2", &env);
    assert_eq!(report.entries.len(), 1);
    assert!(report.read_error.is_some());
    assert!(report.entries[0].outcome.is_ok());
}

#[test]
fn definitions_from_earlier_expressions_are_visible_to_later_ones_in_source_order() {
    let env = root_environment();
    let report = load("(define a 1) (define b (cons a '(2))) b", &env);
    assert!(report.is_ok());
    assert_eq!(
        report.entries[2].outcome.as_ref().unwrap(),
        &Value::List(vec![Value::Number(1.0), Value::Number(2.0)])
    );
}

// Embedding API: hosts register procedures and special forms, then scripts
// loaded afterward can call them like any built-in.

#[test]
fn host_registered_special_form_receives_unevaluated_operands() {
    fn first_unevaluated(args: &[Value], _env: &std::rc::Rc<lisp_sandbox::env::Environment>) -> Result<Value, LispError> {
        Ok(args[0].clone())
    }

    let env = root_environment();
    env.register_syntax("first-raw", first_unevaluated);
    let report = load("(first-raw undefined-name)", &env);
    assert!(report.is_ok());
    assert_eq!(
        report.entries[0].outcome.as_ref().unwrap(),
        &Value::symbol("undefined-name")
    );
}

#[test]
fn host_registered_procedure_is_callable_like_a_builtin() {
    fn add_one(args: &[Value]) -> Result<Value, LispError> {
        let n = args[0]
            .as_number()
            .ok_or_else(|| LispError::type_error("add-one", "a number", args[0].type_name()))?;
        Ok(Value::Number(n + 1.0))
    }

    let env = root_environment();
    env.register_procedure("add-one", add_one);
    let report = load("(define (twice-plus-two n) (add-one (add-one n))) (twice-plus-two 5)", &env);
    assert!(report.is_ok());
    assert_eq!(report.entries[1].outcome.as_ref().unwrap(), &Value::Number(7.0));
}

#[test]
fn printable_forms_used_for_repl_echo() {
    let env = root_environment();
    let report = load("(lambda (x) x)", &env);
    assert!(report.is_ok());
    let text = format!("{}", report);
    assert!(text.contains("#<closure>"));
}

#[test]
fn a_failed_define_leaves_its_name_unbound_for_the_rest_of_the_load() {
    let env = root_environment();
    let report = load("(define broken undefined-name) broken", &env);
    assert!(!report.is_ok());
    assert!(report.entries[0].outcome.is_err());
    assert!(matches!(
        report.entries[1].outcome,
        Err(LispError::UndefinedSymbol(_))
    ));
}
