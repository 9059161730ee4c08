#[cfg(test)]
mod test_utils;
#[cfg(test)]
pub use test_utils::{check_str, is_specific_error, run_str, syntax_error};

mod expression;
mod statement;

use crate::output::Output;
use crate::program_error::ProgramError;
use crate::symbol_table::SymbolTable;
use crate::tokens::{Lexeme, Position, Token, TokenKind, Tokenizer};
use anyhow::Result;
use log::trace;

/// Deepest parenthesis nesting accepted in an expression.
pub const MAX_NESTING: usize = 256;

const STMT_FIRST: [TokenKind; 2] = [TokenKind::Var, TokenKind::Print];
const FACTOR_FIRST: [TokenKind; 4] = [
    TokenKind::LParen,
    TokenKind::Var,
    TokenKind::True,
    TokenKind::False,
];
const TERM_TAIL_FOLLOW: [TokenKind; 4] = [
    TokenKind::RParen,
    TokenKind::Var,
    TokenKind::Print,
    TokenKind::End,
];
const FACTOR_TAIL_FOLLOW: [TokenKind; 5] = [
    TokenKind::Var,
    TokenKind::Or,
    TokenKind::RParen,
    TokenKind::Print,
    TokenKind::End,
];

/// What the parser does besides recognizing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Evaluate expressions, update the symbol table and emit prints.
    #[default]
    Evaluate,
    /// Only check the input against the grammar.
    Recognize,
}

/// Single pass recursive descent parser that evaluates while it parses.
///
/// Every grammar rule is a method keyed on the one token of lookahead.
/// Expression rules return the value of what they recognized, statement
/// rules perform their side effect directly. No syntax tree is built.
pub struct Parser<'source, 'out> {
    tokenizer: Tokenizer<'source>,
    lookahead: Lexeme,
    symbols: SymbolTable,
    output: &'out mut dyn Output,
    mode: Mode,
    depth: usize,
}

impl<'source, 'out> Parser<'source, 'out> {
    pub fn new(input: &'source str, output: &'out mut dyn Output, mode: Mode) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(input);
        let lookahead = tokenizer.next_token()?;
        Ok(Parser {
            tokenizer,
            lookahead,
            symbols: SymbolTable::new(),
            output,
            mode,
            depth: 0,
        })
    }

    /// Runs the whole program and hands back the final bindings.
    pub fn parse(mut self) -> Result<SymbolTable> {
        self.stmt_list()?;
        Ok(self.symbols)
    }

    fn evaluating(&self) -> bool {
        self.mode == Mode::Evaluate
    }

    /// Consumes the lookahead if it has the expected kind and pulls the next
    /// token. This is the only place where input is consumed.
    fn match_token(&mut self, expected: TokenKind) -> Result<()> {
        if self.lookahead.kind() != expected {
            return Err(self.unexpected(&[expected]));
        }
        trace!("matched {}", self.lookahead);
        self.lookahead = self.tokenizer.next_token()?;
        Ok(())
    }

    /// Matches a variable and returns its name and where it appeared.
    fn match_variable(&mut self) -> Result<(String, Position)> {
        let position = self.lookahead.position;
        let name = match &self.lookahead.token {
            Some(Token::Var(name)) => name.clone(),
            _ => return Err(self.unexpected(&[TokenKind::Var])),
        };
        self.match_token(TokenKind::Var)?;
        Ok((name, position))
    }

    fn unexpected(&self, expected: &[TokenKind]) -> anyhow::Error {
        ProgramError::Syntax {
            found: self.lookahead.kind(),
            expected: expected.to_vec(),
            position: self.lookahead.position,
        }
        .into()
    }
}
