//! Arithmetic builtins: `+ - * / %`.
//!
//! All arguments must be Numbers. `-` with a single argument negates;
//! otherwise every operator folds left over its arguments.

use crate::env::Environment;
use crate::error;
use crate::value::Value;
use std::rc::Rc;

fn numbers(op: &str, args: &[Value]) -> Result<Vec<i64>, Value> {
    let mut out = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        match arg {
            Value::Number(n) => out.push(*n),
            _ => return Err(error::type_error(op, i, arg, "Number")),
        }
    }
    Ok(out)
}

fn fold(op: &str, args: Vec<Value>, identity: i64, f: impl Fn(i64, i64) -> Option<i64>) -> Value {
    let nums = match numbers(op, &args) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if nums.is_empty() {
        return Value::Number(identity);
    }
    if op == "-" && nums.len() == 1 {
        return Value::Number(-nums[0]);
    }
    let mut acc = nums[0];
    for &n in &nums[1..] {
        match f(acc, n) {
            Some(result) => acc = result,
            None => return error::division_by_zero(),
        }
    }
    Value::Number(acc)
}

/// `+ a*` — sum, identity 0.
pub fn builtin_add(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    fold("+", args, 0, |a, b| Some(a + b))
}

/// `- a*` — left fold subtraction; negates a lone argument.
pub fn builtin_sub(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    fold("-", args, 0, |a, b| Some(a - b))
}

/// `* a*` — product, identity 1.
pub fn builtin_mul(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    fold("*", args, 1, |a, b| Some(a * b))
}

/// `/ a*` — left fold division; `Division by zero!` on a zero divisor.
pub fn builtin_div(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    fold("/", args, 1, |a, b| if b == 0 { None } else { Some(a / b) })
}

/// `% a b` — remainder; `Division by zero!` on a zero divisor.
pub fn builtin_mod(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    fold("%", args, 0, |a, b| if b == 0 { None } else { Some(a % b) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sums_all_args() {
        let env = Environment::new_global();
        let result = builtin_add(env, vec![Value::Number(1), Value::Number(2), Value::Number(3)]);
        assert!(result.structural_eq(&Value::Number(6)));
    }

    #[test]
    fn test_sub_with_one_arg_negates() {
        let env = Environment::new_global();
        let result = builtin_sub(env, vec![Value::Number(5)]);
        assert!(result.structural_eq(&Value::Number(-5)));
    }

    #[test]
    fn test_sub_folds_left() {
        let env = Environment::new_global();
        let result = builtin_sub(env, vec![Value::Number(10), Value::Number(3), Value::Number(2)]);
        assert!(result.structural_eq(&Value::Number(5)));
    }

    #[test]
    fn test_mul_product() {
        let env = Environment::new_global();
        let result = builtin_mul(env, vec![Value::Number(2), Value::Number(3), Value::Number(4)]);
        assert!(result.structural_eq(&Value::Number(24)));
    }

    #[test]
    fn test_div_by_zero_errors() {
        let env = Environment::new_global();
        let result = builtin_div(env, vec![Value::Number(10), Value::Number(0)]);
        assert!(result.is_error());
    }

    #[test]
    fn test_mod_remainder() {
        let env = Environment::new_global();
        let result = builtin_mod(env, vec![Value::Number(17), Value::Number(5)]);
        assert!(result.structural_eq(&Value::Number(2)));
    }

    #[test]
    fn test_non_number_arg_errors() {
        let env = Environment::new_global();
        let result = builtin_add(env, vec![Value::Number(1), Value::Symbol("x".to_string())]);
        assert!(result.is_error());
    }
}
