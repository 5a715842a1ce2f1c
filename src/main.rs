mod builtins;
mod call;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod reader;
mod value;

use clap::Parser;
use env::Environment;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::path::PathBuf;
use value::Value;

/// A small Lisp-family language: REPL and file loader.
#[derive(Parser, Debug)]
#[command(name = "wispy")]
#[command(version = config::VERSION)]
#[command(about = "Wispy: a tiny Lisp-family language")]
struct CliArgs {
    /// Files to load; with none, starts the REPL instead
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();

    let env = Environment::new_global();
    builtins::register_builtins(&env);

    if args.files.is_empty() {
        run_repl(env);
    } else {
        run_files(env, &args.files);
    }
}

/// spec.md §6.1: one or more positional file arguments — invoke `load` with
/// each argument as a `Value::String`, in order, against one shared global
/// environment; print any Error the `load` call itself returns.
fn run_files(env: std::rc::Rc<Environment>, files: &[PathBuf]) {
    for path in files {
        let arg = Value::String(path.to_string_lossy().into_owned());
        let result = builtins::io::builtin_load(env.clone(), vec![arg]);
        if result.is_error() {
            println!("{}", result);
        }
    }
}

/// spec.md §6.1: no arguments — print a banner, then repeatedly read a
/// line with prompt `wispy~> `, parse it, evaluate it, and print the
/// result prefixed with `    <~  `. A parse error prints the parser's own
/// diagnostic and the loop continues. Ctrl-C reprompts; Ctrl-D exits.
fn run_repl(env: std::rc::Rc<Environment>) {
    println!("{}", config::BANNER);
    println!("{}", config::BANNER_FOOTER);

    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl = match DefaultEditor::with_config(rl_config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize REPL: {}", e);
            return;
        }
    };

    loop {
        match rl.readline("wispy~> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parser::parse_line(&line) {
                    Ok(node) => {
                        let value = reader::read(&node);
                        let result = eval::eval(env.clone(), value);
                        println!("    <~  {}", result);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }
}
