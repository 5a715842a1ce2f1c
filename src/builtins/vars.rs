//! Variable-binding and Lambda-construction builtins: `def`, `=`, `\`.

use crate::env::Environment;
use crate::error;
use crate::value::Value;
use std::rc::Rc;

fn bind_vars(env: Rc<Environment>, func: &str, mut args: Vec<Value>, global: bool) -> Value {
    if args.is_empty() {
        return error::arity_error(func, 0, 1);
    }
    if !matches!(args[0], Value::QExpr(_)) {
        return error::type_error(func, 0, &args[0], "Q-Expression");
    }

    let Value::QExpr(syms) = args.remove(0) else {
        unreachable!()
    };

    for (i, sym) in syms.iter().enumerate() {
        if !matches!(sym, Value::Symbol(_)) {
            return error::type_error(func, i, sym, "Symbol");
        }
    }

    if syms.len() != args.len() {
        return error::arity_error(func, syms.len(), args.len());
    }

    for (sym, value) in syms.into_iter().zip(args) {
        let Value::Symbol(name) = sym else {
            unreachable!()
        };
        if global {
            env.define_global(name, value);
        } else {
            env.define(name, value);
        }
    }

    Value::SExpr(vec![])
}

/// `def {s1 … sn} v1 … vn` — binds in the global environment.
pub fn builtin_def(env: Rc<Environment>, args: Vec<Value>) -> Value {
    bind_vars(env, "def", args, true)
}

/// `= {s1 … sn} v1 … vn` — binds in the current environment.
pub fn builtin_put(env: Rc<Environment>, args: Vec<Value>) -> Value {
    bind_vars(env, "=", args, false)
}

/// `\ {formals} {body}` — constructs a Lambda. The Lambda's own template
/// environment starts empty and parentless; lexical capture happens only
/// through the caller's environment being set as its parent at call time
/// (see `crate::call::apply`), not by closing over the defining scope here.
pub fn builtin_lambda(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return error::arity_error("\\", args.len(), 2);
    }
    if !matches!(args[0], Value::QExpr(_)) {
        return error::type_error("\\", 0, &args[0], "Q-Expression");
    }
    if !matches!(args[1], Value::QExpr(_)) {
        return error::type_error("\\", 1, &args[1], "Q-Expression");
    }

    let body = args.remove(1);
    let Value::QExpr(formal_values) = args.remove(0) else {
        unreachable!()
    };

    let mut formals = Vec::with_capacity(formal_values.len());
    for (i, v) in formal_values.into_iter().enumerate() {
        match v {
            Value::Symbol(name) => formals.push(name),
            other => return error::type_error("\\", i, &other, "Symbol"),
        }
    }

    Value::lambda(formals, body, Environment::new_global())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_binds_in_global_regardless_of_current_frame() {
        let global = Environment::new_global();
        let local = global.fork();
        local.set_parent(global.clone());

        let args = vec![Value::QExpr(vec![Value::Symbol("x".to_string())]), Value::Number(10)];
        let result = builtin_def(local.clone(), args);
        assert!(result.structural_eq(&Value::SExpr(vec![])));

        assert!(global.get("x").unwrap().structural_eq(&Value::Number(10)));
    }

    #[test]
    fn test_put_binds_only_in_current_frame() {
        let global = Environment::new_global();
        let local = global.fork();
        local.set_parent(global.clone());

        let args = vec![Value::QExpr(vec![Value::Symbol("y".to_string())]), Value::Number(5)];
        builtin_put(local.clone(), args);

        assert!(local.get("y").unwrap().structural_eq(&Value::Number(5)));
        assert!(global.get("y").is_none());
    }

    #[test]
    fn test_def_arity_mismatch_errors() {
        let env = Environment::new_global();
        let args = vec![
            Value::QExpr(vec![Value::Symbol("x".to_string()), Value::Symbol("y".to_string())]),
            Value::Number(1),
        ];
        assert!(builtin_def(env, args).is_error());
    }

    #[test]
    fn test_def_non_symbol_in_list_errors() {
        let env = Environment::new_global();
        let args = vec![Value::QExpr(vec![Value::Number(1)]), Value::Number(1)];
        assert!(builtin_def(env, args).is_error());
    }

    #[test]
    fn test_lambda_constructs_with_formals_and_body() {
        let env = Environment::new_global();
        let args = vec![
            Value::QExpr(vec![Value::Symbol("x".to_string())]),
            Value::QExpr(vec![Value::Symbol("x".to_string())]),
        ];
        let result = builtin_lambda(env, args);
        assert!(matches!(result, Value::Function(_)));
    }

    #[test]
    fn test_lambda_requires_symbol_formals() {
        let env = Environment::new_global();
        let args = vec![
            Value::QExpr(vec![Value::Number(1)]),
            Value::QExpr(vec![]),
        ];
        assert!(builtin_lambda(env, args).is_error());
    }
}
