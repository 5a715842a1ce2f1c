// ABOUTME: The evaluator — eval(env, value) -> value, with no Result: Error is just a Value

use crate::call;
use crate::env::Environment;
use crate::error;
use crate::value::Value;
use std::rc::Rc;

/// `eval(env, v) -> Value` per spec.md §4.3. Numbers, Strings, QExprs,
/// Functions and Errors are self-evaluating; Symbols resolve through the
/// environment chain; SExprs reduce per `eval_sexpr`.
pub fn eval(env: Rc<Environment>, v: Value) -> Value {
    match v {
        Value::Symbol(name) => env.get(&name).unwrap_or_else(|| error::unbound_symbol(&name)),
        Value::SExpr(items) => eval_sexpr(env, items),
        other => other,
    }
}

fn eval_sexpr(env: Rc<Environment>, items: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let result = eval(env.clone(), item);
        if result.is_error() {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }
    if evaluated.len() == 1 {
        return evaluated.into_iter().next().unwrap();
    }

    let mut rest = evaluated;
    let head = rest.remove(0);
    match head {
        Value::Function(f) => call::apply(env, f, rest),
        other => error::sexpr_incorrect_head(&other),
    }
}
