// ABOUTME: nom-based recursive-descent parser implementing Wispy's grammar

pub mod node;

use crate::error::ParseError;
use node::Node;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace0},
    combinator::{opt, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult, Parser,
};

fn ws0(input: &str) -> IResult<&str, ()> {
    multispace0.map(|_| ()).parse(input)
}

/// `number : /-?[0-9]+(\.[0-9]+)?/`
fn number_node(input: &str) -> IResult<&str, Node> {
    recognize(pair(opt(char('-')), pair(digit1, opt(pair(char('.'), digit1)))))
        .map(|s: &str| Node::leaf("number", s))
        .parse(input)
}

/// `symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&]+/`
fn symbol_node(input: &str) -> IResult<&str, Node> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || "_+-*/\\=<>!&".contains(c))
        .map(|s: &str| Node::leaf("symbol", s))
        .parse(input)
}

/// `string : /"(\\.|[^"])*"/` — contents keeps the raw quoted source text
/// verbatim, including the surrounding quotes; escape resolution happens
/// later, in `crate::reader::read`, not here.
fn string_node(input: &str) -> IResult<&str, Node> {
    let (rest, matched) = recognize(pair(
        char('"'),
        terminated(
            many0(alt((
                recognize(pair(char('\\'), nom::character::complete::anychar)),
                recognize(nom::character::complete::none_of("\"\\")),
            ))),
            char('"'),
        ),
    ))
    .parse(input)?;
    Ok((rest, Node::leaf("string", matched)))
}

/// `comment : /;[^\r\n]*/`
fn comment_node(input: &str) -> IResult<&str, Node> {
    recognize(pair(
        char(';'),
        nom::bytes::complete::take_while(|c: char| c != '\r' && c != '\n'),
    ))
    .map(|s: &str| Node::leaf("comment", s))
    .parse(input)
}

fn group_node(opener: char, closer: char, tag: &'static str) -> impl Fn(&str) -> IResult<&str, Node> {
    move |input: &str| {
        let (mut input, _) = char(opener)(input)?;
        let mut children = vec![Node::leaf("char", opener.to_string())];
        loop {
            let (rest, _) = ws0(input)?;
            input = rest;
            if let Ok((rest, _)) = char::<_, nom::error::Error<&str>>(closer)(input) {
                children.push(Node::leaf("char", closer.to_string()));
                return Ok((rest, Node::branch(tag, children)));
            }
            if input.is_empty() {
                return Err(nom::Err::Error(nom::error::Error::new(
                    input,
                    nom::error::ErrorKind::Eof,
                )));
            }
            let (rest, child) = expr_node(input)?;
            children.push(child);
            input = rest;
        }
    }
}

/// `sexpr : '(' expr* ')'`
fn sexpr_node(input: &str) -> IResult<&str, Node> {
    group_node('(', ')', "sexpr")(input)
}

/// `qexpr : '{' expr* '}'`
fn qexpr_node(input: &str) -> IResult<&str, Node> {
    group_node('{', '}', "qexpr")(input)
}

/// `expr : number | symbol | string | comment | sexpr | qexpr`
///
/// `number` and `symbol` both admit ASCII digits, so number is tried first —
/// the same disambiguation-by-alternative-order mpc-style parsers use.
fn expr_node(input: &str) -> IResult<&str, Node> {
    alt((comment_node, number_node, string_node, sexpr_node, qexpr_node, symbol_node)).parse(input)
}

fn exprs(input: &str) -> IResult<&str, Vec<Node>> {
    preceded(ws0, many0(terminated(expr_node, ws0))).parse(input)
}

fn to_parse_error(input: &str, err: nom::Err<nom::error::Error<&str>>) -> ParseError {
    match err {
        nom::Err::Incomplete(_) => ParseError::UnexpectedEof,
        nom::Err::Error(e) | nom::Err::Failure(e) => match e.input.chars().next() {
            Some(found) => ParseError::UnexpectedChar {
                found,
                position: input.len() - e.input.len(),
            },
            None => ParseError::UnexpectedEof,
        },
    }
}

/// Wraps a `program`'s top-level expressions with the `^`/`$` anchor nodes
/// the grammar's `expr*` is implicitly bounded by, as real sibling nodes —
/// so `reader::read`'s filtering of pure regex terminals has real structure
/// to filter rather than relying on the parser having silently dropped them.
fn wrap_root(mut children: Vec<Node>) -> Node {
    let mut all = vec![Node::leaf("regex", "^")];
    all.append(&mut children);
    all.push(Node::leaf("regex", "$"));
    Node::branch("root", all)
}

fn parse_root(input: &str) -> Result<Node, ParseError> {
    match exprs(input) {
        Ok((rest, children)) => {
            if !rest.is_empty() {
                return Err(ParseError::TrailingInput(rest.to_string()));
            }
            Ok(wrap_root(children))
        }
        Err(e) => Err(to_parse_error(input, e)),
    }
}

/// Parses one REPL line into a `root` node holding zero or more top-level
/// `expr` children.
pub fn parse_line(input: &str) -> Result<Node, ParseError> {
    parse_root(input)
}

/// Parses a whole loaded file into a `root` node. Same grammar as
/// `parse_line` — `program : expr*` admits any number of top-level forms —
/// the distinction is purely in how the caller (`load`) then evaluates the
/// children, one at a time rather than as a single combined form.
pub fn parse_program(input: &str) -> Result<Node, ParseError> {
    parse_root(input)
}
