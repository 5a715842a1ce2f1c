//! List and quotation builtins: `list`, `head`, `tail`, `join`, `eval`.
//!
//! These operate on Q-Expressions, Wispy's inert list literal — none of
//! them evaluate their arguments beyond the standard call-site evaluation
//! every builtin already receives its `args` through.

use crate::env::Environment;
use crate::error;
use crate::eval;
use crate::value::Value;
use std::rc::Rc;

/// `list a*` wraps whatever arguments it is given as a Q-Expression,
/// unconditionally — there is no type restriction here.
pub fn builtin_list(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

/// `head {x y …}` keeps only the first element of a non-empty Q-Expression.
pub fn builtin_head(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return error::arity_error("head", args.len(), 1);
    }
    match &args[0] {
        Value::QExpr(items) if items.is_empty() => error::empty_list_error("head", 0),
        Value::QExpr(_) => {
            let mut items = match args.remove(0) {
                Value::QExpr(items) => items,
                _ => unreachable!(),
            };
            items.truncate(1);
            Value::QExpr(items)
        }
        other => error::type_error("head", 0, other, "Q-Expression"),
    }
}

/// `tail {x y …}` drops the first element of a non-empty Q-Expression.
pub fn builtin_tail(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return error::arity_error("tail", args.len(), 1);
    }
    match &args[0] {
        Value::QExpr(items) if items.is_empty() => error::empty_list_error("tail", 0),
        Value::QExpr(_) => {
            let mut items = match args.remove(0) {
                Value::QExpr(items) => items,
                _ => unreachable!(),
            };
            items.remove(0);
            Value::QExpr(items)
        }
        other => error::type_error("tail", 0, other, "Q-Expression"),
    }
}

/// `join {…} {…} …` concatenates any number of Q-Expressions in order.
pub fn builtin_join(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    for (i, arg) in args.iter().enumerate() {
        if !matches!(arg, Value::QExpr(_)) {
            return error::type_error("join", i, arg, "Q-Expression");
        }
    }
    let mut joined = Vec::new();
    for arg in args {
        if let Value::QExpr(items) = arg {
            joined.extend(items);
        }
    }
    Value::QExpr(joined)
}

/// `eval {…}` re-tags its single Q-Expression argument as an SExpr and
/// evaluates it in the calling environment.
pub fn builtin_eval(env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return error::arity_error("eval", args.len(), 1);
    }
    if !matches!(args[0], Value::QExpr(_)) {
        return error::type_error("eval", 0, &args[0], "Q-Expression");
    }
    let x = args.remove(0).into_sexpr();
    eval::eval(env, x)
}
