pub mod classifier;
pub mod interpreter;
pub mod lexer;
pub mod parser;

use interpreter::{SystemContext, TreeWalkInterpreter};
use parser::Program;
use std::path::Path;

/// Scans, classifies and parses `source`.
pub fn compile(source: &str) -> Program {
    parser::parse(classifier::classify(lexer::scan(source)))
}

/// Runs `source` from scratch and hands the context back.
pub fn run_source<C: SystemContext>(source: &str, context: C) -> C {
    let program = compile(source);
    TreeWalkInterpreter::new(context).run(&program)
}

/// Reads a source file. Invalid UTF-8 is replaced rather than rejected, so only
/// I/O failures are errors.
pub fn read_source(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
