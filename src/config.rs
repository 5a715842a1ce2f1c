// ABOUTME: Version string and REPL banner text

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BANNER: &str = "Wispy Lisp Version 0.1.0";
pub const BANNER_FOOTER: &str = "Press Ctrl+c to Exit\n";
