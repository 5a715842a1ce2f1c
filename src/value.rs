// ABOUTME: Value types representing Wispy's runtime data and the canonical printer

use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

/// A builtin is an opaque callable, represented the way the source language
/// (C function pointers) modeled it: a plain `fn` item. `fn` pointers are
/// `PartialEq` by address in Rust, which is what gives builtins identity
/// equality for free (see `Value::structural_eq`).
pub type BuiltinFn = fn(Rc<Environment>, Vec<Value>) -> Value;

#[derive(Clone)]
pub struct Lambda {
    pub formals: Vec<String>,
    pub body: Box<Value>,
    pub env: Rc<Environment>,
}

#[derive(Clone)]
pub enum Function {
    Builtin(BuiltinFn),
    Lambda(Lambda),
}

#[derive(Clone)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    String(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
    Function(Function),
}

impl Value {
    pub fn builtin(f: BuiltinFn) -> Value {
        Value::Function(Function::Builtin(f))
    }

    pub fn lambda(formals: Vec<String>, body: Value, env: Rc<Environment>) -> Value {
        Value::Function(Function::Lambda(Lambda {
            formals,
            body: Box::new(body),
            env,
        }))
    }

    /// Name used in type-error messages, matching the source's `wtype_name`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::String(_) => "String",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Re-tags a Q-Expression as an S-Expression (spec.md §4.4/§4.5: the
    /// chosen `if` branch, and a lambda's body, are converted this way
    /// immediately before evaluation). Any other value passes through.
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(items) => Value::SExpr(items),
            other => other,
        }
    }

    /// Structural equality per spec.md §4.5: numbers by value; strings,
    /// symbols, errors by byte equality; SExpr/QExpr element-wise and by
    /// length; builtins by identity (function-pointer address); lambdas
    /// by structural equality of formals and body, ignoring environment.
    pub fn structural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structural_eq(y))
            }
            (Value::Function(Function::Builtin(a)), Value::Function(Function::Builtin(b))) => {
                std::ptr::eq(*a as *const (), *b as *const ())
            }
            (Value::Function(Function::Lambda(a)), Value::Function(Function::Lambda(b))) => {
                a.formals == b.formals && a.body.structural_eq(&b.body)
            }
            _ => false,
        }
    }
}

fn write_escaped_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '"' => write!(f, "\\\"")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            other => write!(f, "{}", other)?,
        }
    }
    write!(f, "\"")
}

fn write_expr(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::String(s) => write_escaped_string(f, s),
            Value::SExpr(items) => write_expr(f, items, '(', ')'),
            Value::QExpr(items) => write_expr(f, items, '{', '}'),
            Value::Function(Function::Builtin(_)) => write!(f, "<builtin>"),
            Value::Function(Function::Lambda(l)) => {
                write!(f, "(\\ ")?;
                write_expr(
                    f,
                    &l.formals
                        .iter()
                        .map(|s| Value::Symbol(s.clone()))
                        .collect::<Vec<_>>(),
                    '{',
                    '}',
                )?;
                write!(f, " ")?;
                write!(f, "{}", l.body)?;
                write!(f, ")")
            }
            Value::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self, self.type_name())
    }
}
