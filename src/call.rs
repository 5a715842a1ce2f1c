// ABOUTME: Call machinery — builtin dispatch and Lambda currying/variadic binding

use crate::env::Environment;
use crate::error;
use crate::eval;
use crate::value::{Function, Lambda, Value};
use std::rc::Rc;

/// Applies `f` to `args`, already evaluated, per spec.md §4.4.
pub fn apply(env: Rc<Environment>, f: Function, args: Vec<Value>) -> Value {
    match f {
        Function::Builtin(func) => func(env, args),
        Function::Lambda(lambda) => apply_lambda(env, lambda, args),
    }
}

fn apply_lambda(caller_env: Rc<Environment>, lambda: Lambda, mut args: Vec<Value>) -> Value {
    let given = args.len();
    let total = lambda.formals.len();

    // Bind into a fresh frame forked from the Lambda's template env, never
    // the template itself (spec.md §9's "safer restatement" of currying).
    let local = lambda.env.fork();
    let mut formals = lambda.formals;
    let body = lambda.body;

    while !args.is_empty() {
        if formals.is_empty() {
            return error::too_many_arguments(given, total);
        }
        let sym = formals.remove(0);
        if sym == "&" {
            if formals.len() != 1 {
                return error::format_invalid_amp();
            }
            let varsym = formals.remove(0);
            local.define(varsym, Value::QExpr(args));
            args = Vec::new();
            break;
        }
        let val = args.remove(0);
        local.define(sym, val);
    }

    if formals.first().map(|s| s.as_str()) == Some("&") {
        if formals.len() != 2 {
            return error::format_invalid_amp();
        }
        let varsym = formals[1].clone();
        local.define(varsym, Value::QExpr(vec![]));
        formals.clear();
    }

    if formals.is_empty() {
        local.set_parent(caller_env);
        eval::eval(local, (*body).into_sexpr())
    } else {
        // Partial application: return a copy of the lambda with the
        // remaining formals and the already-bound local frame. The body
        // is carried unchanged (still a Q-Expression) — it is only
        // re-tagged as an S-Expression at the point of full application,
        // matching `wval_call`'s `wval_copy(f)` returning the body as-is.
        Value::lambda(formals, *body, local)
    }
}
