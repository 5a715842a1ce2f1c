//! I/O and loader builtins: `print`, `error`, `load`.

use crate::env::Environment;
use crate::eval;
use crate::parser;
use crate::reader;
use crate::value::Value;
use std::fs;
use std::rc::Rc;

/// `print v …` — prints each argument separated by spaces, then a newline.
pub fn builtin_print(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Value::SExpr(vec![])
}

/// `error "msg"` — turns any single argument's rendering into an Error.
pub fn builtin_error(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    match args.first() {
        Some(Value::String(msg)) => Value::Error(msg.clone()),
        Some(other) => Value::Error(other.to_string()),
        None => Value::Error(String::new()),
    }
}

/// `load "path"` — parses the file, evaluating each top-level form in turn
/// in the global environment. Per-expression Errors are printed but do not
/// abort the load; a parse failure on the whole file does.
pub fn builtin_load(env: Rc<Environment>, args: Vec<Value>) -> Value {
    let path = match args.first() {
        Some(Value::String(p)) => p.clone(),
        Some(other) => return crate::error::type_error("load", 0, other, "String"),
        None => return crate::error::arity_error("load", 0, 1),
    };

    let source = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => return crate::error::could_not_load_library(&e.to_string()),
    };

    let root = match parser::parse_program(&source) {
        Ok(node) => node,
        Err(e) => return crate::error::could_not_load_library(&e.to_string()),
    };

    let global = env.root();
    for child in &root.children {
        if child.is_tagged("regex") || child.is_tagged("char") || child.is_tagged("comment") {
            continue;
        }
        let value = reader::read(child);
        let result = eval::eval(global.clone(), value);
        if result.is_error() {
            println!("{}", result);
        }
    }

    Value::SExpr(vec![])
}
