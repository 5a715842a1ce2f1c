//! # Built-in Functions Module
//!
//! The builtins that define Wispy's language semantics, organized into 6
//! categories with 23 total functions.
//!
//! ## Categories
//!
//! - **[lists]** (5): list, head, tail, join, eval
//! - **[vars]** (3): def, =, \
//! - **[arithmetic]** (5): +, -, *, /, %
//! - **[comparison]** (6): > < >= <= == !=
//! - **[control]** (1): if
//! - **[io]** (3): print, error, load

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod control;
pub mod io;
pub mod lists;
pub mod vars;

/// Populates a fresh global environment with every builtin in spec.md §4.5.
pub fn register_builtins(env: &Rc<Environment>) {
    env.define("list".to_string(), Value::builtin(lists::builtin_list));
    env.define("head".to_string(), Value::builtin(lists::builtin_head));
    env.define("tail".to_string(), Value::builtin(lists::builtin_tail));
    env.define("join".to_string(), Value::builtin(lists::builtin_join));
    env.define("eval".to_string(), Value::builtin(lists::builtin_eval));

    env.define("def".to_string(), Value::builtin(vars::builtin_def));
    env.define("=".to_string(), Value::builtin(vars::builtin_put));
    env.define("\\".to_string(), Value::builtin(vars::builtin_lambda));

    env.define("+".to_string(), Value::builtin(arithmetic::builtin_add));
    env.define("-".to_string(), Value::builtin(arithmetic::builtin_sub));
    env.define("*".to_string(), Value::builtin(arithmetic::builtin_mul));
    env.define("/".to_string(), Value::builtin(arithmetic::builtin_div));
    env.define("%".to_string(), Value::builtin(arithmetic::builtin_mod));

    env.define(">".to_string(), Value::builtin(comparison::builtin_gt));
    env.define("<".to_string(), Value::builtin(comparison::builtin_lt));
    env.define(">=".to_string(), Value::builtin(comparison::builtin_ge));
    env.define("<=".to_string(), Value::builtin(comparison::builtin_le));
    env.define("==".to_string(), Value::builtin(comparison::builtin_eq));
    env.define("!=".to_string(), Value::builtin(comparison::builtin_neq));

    env.define("if".to_string(), Value::builtin(control::builtin_if));

    env.define("print".to_string(), Value::builtin(io::builtin_print));
    env.define("error".to_string(), Value::builtin(io::builtin_error));
    env.define("load".to_string(), Value::builtin(io::builtin_load));
}
