//! Control-flow builtin: `if`.

use crate::env::Environment;
use crate::error;
use crate::eval;
use crate::value::Value;
use std::rc::Rc;

/// `if c {then} {else}` — evaluates the `then` branch when `c` is a
/// non-zero Number, otherwise the `else` branch. The branch that is not
/// chosen is never evaluated; the chosen one is re-tagged as an SExpr
/// before evaluation, per `Value::into_sexpr`.
pub fn builtin_if(env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 3 {
        return error::arity_error("if", args.len(), 3);
    }
    if !matches!(args[0], Value::Number(_)) {
        return error::type_error("if", 0, &args[0], "Number");
    }
    if !matches!(args[1], Value::QExpr(_)) {
        return error::type_error("if", 1, &args[1], "Q-Expression");
    }
    if !matches!(args[2], Value::QExpr(_)) {
        return error::type_error("if", 2, &args[2], "Q-Expression");
    }

    let else_branch = args.remove(2);
    let then_branch = args.remove(1);
    let condition = match args.remove(0) {
        Value::Number(n) => n,
        _ => unreachable!(),
    };

    let chosen = if condition != 0 { then_branch } else { else_branch };
    eval::eval(env, chosen.into_sexpr())
}
