// ABOUTME: The single adapter from a parsed syntax tree to a runtime Value

use crate::parser::node::Node;
use crate::value::Value;

fn resolve_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn read_string(contents: &str) -> Value {
    let inner = contents
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(contents);
    Value::String(resolve_escapes(inner))
}

/// `strtol`-like truncating parse: `3.14` reads as `3` (spec's documented,
/// intentionally-kept quirk — see the number-representation design note).
fn read_number(contents: &str) -> Value {
    let integer_part = contents.split('.').next().unwrap_or(contents);
    match integer_part.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error("Invalid number".to_string()),
    }
}

fn is_structural(node: &Node) -> bool {
    node.is_tagged("char") || node.is_tagged("regex") || node.is_tagged("comment")
}

fn read_children(node: &Node) -> Vec<Value> {
    node.children
        .iter()
        .filter(|child| !is_structural(child))
        .map(read)
        .collect()
}

/// `reader::read` — spec.md §4.1. Dispatches on the node's tag; tags are
/// matched by substring since a concrete tag (e.g. the root node's) may be
/// composed of several joined words.
pub fn read(node: &Node) -> Value {
    if node.is_tagged("number") {
        read_number(&node.contents)
    } else if node.is_tagged("string") {
        read_string(&node.contents)
    } else if node.is_tagged("symbol") {
        Value::Symbol(node.contents.clone())
    } else if node.is_tagged("qexpr") {
        Value::QExpr(read_children(node))
    } else if node.is_tagged("sexpr") || node.tag == "root" {
        Value::SExpr(read_children(node))
    } else {
        // comment, char, regex nodes are filtered by the caller and never
        // reach here directly except through read_children's guard.
        Value::SExpr(vec![])
    }
}
