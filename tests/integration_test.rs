// ABOUTME: End-to-end REPL-line scenarios from spec.md §8, run through the full
// ABOUTME: parse -> read -> eval -> Display pipeline against a fresh global env.

use wispy::builtins::register_builtins;
use wispy::env::Environment;
use wispy::eval::eval;
use wispy::parser::parse_line;
use wispy::reader::read;
use wispy::value::Value;
use std::rc::Rc;

fn run(env: &Rc<Environment>, line: &str) -> String {
    let node = parse_line(line).expect("parse failed");
    let value = read(&node);
    format!("{}", eval(env.clone(), value))
}

fn fresh_env() -> Rc<Environment> {
    let env = Environment::new_global();
    register_builtins(&env);
    env
}

#[test]
fn test_sum_of_three() {
    let env = fresh_env();
    assert_eq!(run(&env, "(+ 1 2 3)"), "6");
}

#[test]
fn test_unary_minus_negates() {
    let env = fresh_env();
    assert_eq!(run(&env, "(- 5)"), "-5");
}

#[test]
fn test_division_by_zero() {
    let env = fresh_env();
    assert_eq!(run(&env, "(/ 10 0)"), "Error: Division by zero!");
}

#[test]
fn test_def_then_reference() {
    let env = fresh_env();
    assert_eq!(run(&env, "(def {x} 10)"), "()");
    assert_eq!(run(&env, "(+ x 5)"), "15");
}

#[test]
fn test_lambda_def_and_call() {
    let env = fresh_env();
    assert_eq!(
        run(&env, "(def {add-mul} (\\ {x y} {+ x (* x y)}))"),
        "()"
    );
    assert_eq!(run(&env, "(add-mul 10 20)"), "210");
}

#[test]
fn test_currying_partial_application() {
    let env = fresh_env();
    assert_eq!(run(&env, "(def {add} (\\ {x y} {+ x y}))"), "()");
    // A partial application prints as a Lambda with the remaining formal.
    let partial = run(&env, "(add 10)");
    assert!(partial.starts_with("(\\ {y}"));
    assert_eq!(run(&env, "((add 10) 20)"), "30");
}

#[test]
fn test_variadic_formals() {
    let env = fresh_env();
    assert_eq!(
        run(&env, "(def {f} (\\ {x & xs} {join (list x) xs}))"),
        "()"
    );
    assert_eq!(run(&env, "(f 1 2 3 4)"), "{1 2 3 4}");
}

#[test]
fn test_if_picks_then_branch() {
    let env = fresh_env();
    assert_eq!(run(&env, "(if (== 1 1) {+ 1 2} {+ 10 20})"), "3");
}

#[test]
fn test_if_picks_else_branch() {
    let env = fresh_env();
    assert_eq!(run(&env, "(if (== 1 2) {+ 1 2} {+ 10 20})"), "30");
}

#[test]
fn test_head_of_empty_qexpr_errors() {
    let env = fresh_env();
    assert_eq!(
        run(&env, "(head {})"),
        "Error: Function 'head' passed {} for argument 0."
    );
}

#[test]
fn test_eval_of_head_of_sexpr_list() {
    let env = fresh_env();
    assert_eq!(run(&env, "(eval (head {(+ 1 2) (+ 10 20)}))"), "3");
}

#[test]
fn test_unbound_symbol_errors() {
    let env = fresh_env();
    assert_eq!(run(&env, "nope"), "Error: Unbound symbol 'nope'");
}

#[test]
fn test_def_is_visible_from_nested_lambda_call() {
    let env = fresh_env();
    run(&env, "(def {y} 100)");
    run(&env, "(def {addy} (\\ {x} {+ x y}))");
    assert_eq!(run(&env, "(addy 1)"), "101");
}

#[test]
fn test_local_put_does_not_leak_to_global() {
    let env = fresh_env();
    run(&env, "(def {f} (\\ {} {= {z} 5}))");
    run(&env, "(f)");
    assert_eq!(run(&env, "z"), "Error: Unbound symbol 'z'");
}

#[test]
fn test_string_literal_round_trips_through_printer() {
    let env = fresh_env();
    assert_eq!(run(&env, r#""hi\nthere""#), "\"hi\\nthere\"");
}

#[test]
fn test_load_missing_file_reports_error() {
    let env = fresh_env();
    let result = run(&env, r#"(load "/no/such/file.wispy")"#);
    assert!(result.starts_with("Error: Could not load Library"));
}

#[test]
fn test_load_evaluates_file_and_printed_errors_do_not_abort() {
    let env = fresh_env();
    let dir = std::env::temp_dir();
    let path = dir.join("wispy_integration_load_test.wisp");
    std::fs::write(
        &path,
        "(def {a} 1)\n(totally-unbound-symbol)\n(def {b} (+ a 1))",
    )
    .unwrap();

    let arg = format!(r#"(load "{}")"#, path.to_string_lossy());
    assert_eq!(run(&env, &arg), "()");
    assert_eq!(run(&env, "b"), "2");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_number_literal_truncates_fractional_part() {
    let env = fresh_env();
    assert_eq!(run(&env, "3.99"), "3");
}
