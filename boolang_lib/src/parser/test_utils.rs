use super::{Mode, Parser};

use crate::program_error::ProgramError;
use crate::symbol_table::SymbolTable;
use crate::tokens::{Position, TokenKind};
use anyhow::Result;

/// Evaluates a program and returns the printed values and the final bindings.
pub fn run_str(input: &str) -> Result<(Vec<bool>, SymbolTable)> {
    let mut printed: Vec<bool> = Vec::new();
    let symbols = Parser::new(input, &mut printed, Mode::Evaluate)?.parse()?;
    Ok((printed, symbols))
}

/// Recognizes a program without evaluating it.
pub fn check_str(input: &str) -> Result<()> {
    let mut printed: Vec<bool> = Vec::new();
    Parser::new(input, &mut printed, Mode::Recognize)?.parse()?;
    assert!(printed.is_empty());
    Ok(())
}

pub fn is_specific_error(error: &anyhow::Error, expected_error: &ProgramError) -> bool {
    if let Some(actual_error) = error.downcast_ref::<ProgramError>() {
        if actual_error != expected_error {
            println!("expected {:?}\n     got {:?}", expected_error, actual_error);
        }
        actual_error == expected_error
    } else {
        println!("not a program error: {:?}", error);
        false
    }
}

pub fn syntax_error(
    found: TokenKind,
    expected: &[TokenKind],
    line: usize,
    column: usize,
) -> ProgramError {
    ProgramError::Syntax {
        found,
        expected: expected.to_vec(),
        position: Position::new(line, column),
    }
}
