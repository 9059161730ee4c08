//! This crate provides the implementation of the boolang language.
//! It defines the tokenizer, a single pass parser that evaluates programs while parsing them,
//! and the symbol table holding the variables of a run.
//! For documentation of the language itself and how you can use it see the documentation of the `boolang` crate.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

pub mod output;
pub mod parser;
pub mod program_error;
pub mod symbol_table;
pub mod tokens;

pub use output::{Output, WriteOutput};
pub use parser::{Mode, Parser};
pub use program_error::{report, ProgramError};
pub use symbol_table::SymbolTable;

/// Runs a program and collects the values of its `print` statements.
pub fn run(input: &str) -> Result<Vec<bool>> {
    let mut printed: Vec<bool> = Vec::new();
    run_with_output(input, &mut printed)?;
    Ok(printed)
}

/// Runs a program, sending printed values to `output` as they are produced.
/// Returns the variables as they are at the end of the program.
pub fn run_with_output(input: &str, output: &mut dyn Output) -> Result<SymbolTable> {
    debug!("running program of {} bytes", input.len());
    let symbols = Parser::new(input, output, Mode::Evaluate)?.parse()?;
    debug!("program finished with {} variables", symbols.len());
    Ok(symbols)
}

/// Checks a program against the grammar without evaluating anything.
pub fn check(input: &str) -> Result<()> {
    let mut printed: Vec<bool> = Vec::new();
    Parser::new(input, &mut printed, Mode::Recognize)?.parse()?;
    Ok(())
}

/// Reads a source file and runs it.
pub fn run_file(path: impl AsRef<Path>, output: &mut dyn Output) -> Result<SymbolTable> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read the input file '{}'", path.display()))?;
    run_with_output(&input, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run() -> Result<()> {
        assert_eq!(run("x = t print x print not x")?, vec![true, false]);
        Ok(())
    }

    #[test]
    fn test_run_with_output_streams_before_error() {
        let mut output = WriteOutput::new(Vec::new());
        let result = run_with_output("print t print f print missing", &mut output);
        assert!(result.is_err());
        assert_eq!(output.into_inner(), b"true\nfalse\n".to_vec());
    }

    #[test]
    fn test_check_skips_evaluation() -> Result<()> {
        check("print undefined and t")?;
        assert!(run("print undefined and t").is_err());
        assert!(check("print undefined and").is_err());
        Ok(())
    }

    #[test]
    fn test_run_file_missing() {
        let mut printed: Vec<bool> = Vec::new();
        let err = run_file("does/not/exist.bool", &mut printed).unwrap_err();
        assert!(report(&err).starts_with("Error: Failed to read the input file"));
    }
}
