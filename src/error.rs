// ABOUTME: Message-formatting for runtime Error values, and the parser's own Result-based errors

use crate::value::Value;
use thiserror::Error;

// ===== Runtime errors (spec.md §7) — always produced as Value::Error =====
//
// These are plain functions, not an enum: spec.md §7 is explicit that
// errors are first-class Values, never exceptions, so there is no
// `Result<_, RuntimeError>` to model here — only message text that ends
// up inside a `Value::Error`. Centralizing the formatting here is what
// keeps every call site's wording byte-for-byte identical to spec.md.

pub fn unbound_symbol(name: &str) -> Value {
    Value::Error(format!("Unbound symbol '{}'", name))
}

pub fn type_error(func: &str, index: usize, got: &Value, expected: &str) -> Value {
    Value::Error(format!(
        "Function '{}' passed incorrect type for argument {}. Got {}, Expected {}",
        func,
        index,
        got.type_name(),
        expected
    ))
}

pub fn arity_error(func: &str, got: usize, expected: usize) -> Value {
    Value::Error(format!(
        "Function '{}' passed incorrect number of arguments. Got {}, Expected {}.",
        func, got, expected
    ))
}

pub fn empty_list_error(func: &str, index: usize) -> Value {
    Value::Error(format!(
        "Function '{}' passed {{}} for argument {}.",
        func, index
    ))
}

pub fn division_by_zero() -> Value {
    Value::Error("Division by zero!".to_string())
}

pub fn sexpr_incorrect_head(got: &Value) -> Value {
    Value::Error(format!(
        "S-Expression starts with incorrect type. Got {}, Expected Function.",
        got.type_name()
    ))
}

pub fn too_many_arguments(given: usize, total: usize) -> Value {
    Value::Error(format!(
        "Function passed too many arguments. Got {}, Expected {}.",
        given, total
    ))
}

pub fn format_invalid_amp() -> Value {
    Value::Error(
        "Function format invalid. Symbol '&' not followed by single symbol.".to_string(),
    )
}

pub fn could_not_load_library(parser_message: &str) -> Value {
    Value::Error(format!("Could not load Library {}", parser_message))
}

// ===== Parser errors — a genuine Result channel =====
//
// Unlike the runtime errors above, a failure to parse text into a `Node`
// tree happens before there is any `Value` to carry the diagnostic in, so
// this is the one place in the crate that keeps the teacher's `thiserror`
// ambient error-handling style.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected trailing input: '{0}'")]
    TrailingInput(String),

    #[error("unexpected end of input")]
    UnexpectedEof,
}
