use crate::program_error::ProgramError;
use anyhow::Result;
pub use logos::Logos;
use std::fmt::{Debug, Display};

/// Line and column of a token start, both counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} char {}", self.line, self.column)
    }
}

#[derive(Logos, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("not")]
    Not,

    #[token("and")]
    And,

    #[token("or")]
    Or,

    #[token("=")]
    Equals,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("print")]
    Print,

    #[regex("[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_owned())]
    Var(String),

    #[token("true", ignore(case))]
    #[token("t", priority = 3, ignore(case))]
    #[token("1")]
    True,

    #[token("false", ignore(case))]
    #[token("f", priority = 3, ignore(case))]
    #[token("0")]
    False,
}

/// Kind of a token without its payload. `End` marks the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Not,
    And,
    Or,
    Equals,
    LParen,
    RParen,
    Print,
    Var,
    True,
    False,
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Not => TokenKind::Not,
            Self::And => TokenKind::And,
            Self::Or => TokenKind::Or,
            Self::Equals => TokenKind::Equals,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Print => TokenKind::Print,
            Self::Var(_) => TokenKind::Var,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(name) => write!(f, "{}", name),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(name) => write!(f, "Var({})", name),
            _ => write!(f, "{}", self),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "not"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Equals => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Print => write!(f, "print"),
            Self::Var => write!(f, "variable"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A scanned token together with the position it starts at.
/// `token` is `None` once the input is exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Option<Token>,
    pub position: Position,
}

impl Lexeme {
    pub fn kind(&self) -> TokenKind {
        self.token.as_ref().map_or(TokenKind::End, Token::kind)
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{} ({})", token, self.position),
            None => write!(f, "{} ({})", TokenKind::End, self.position),
        }
    }
}

/// Pull-based scanner handing out one token at a time.
pub struct Tokenizer<'source> {
    lexer: logos::Lexer<'source, Token>,
    line: usize,
    line_start: usize,
    scanned: usize,
}

impl<'source> Tokenizer<'source> {
    pub fn new(input: &'source str) -> Self {
        Tokenizer {
            lexer: Token::lexer(input),
            line: 1,
            line_start: 0,
            scanned: 0,
        }
    }

    /// Scans the next token. Offsets only ever move forward, so line
    /// bookkeeping is done incrementally.
    pub fn next_token(&mut self) -> Result<Lexeme, ProgramError> {
        match self.lexer.next() {
            None => {
                let position = self.position_at(self.lexer.source().len());
                Ok(Lexeme {
                    token: None,
                    position,
                })
            }
            Some(Ok(token)) => {
                let position = self.position_at(self.lexer.span().start);
                Ok(Lexeme {
                    token: Some(token),
                    position,
                })
            }
            Some(Err(())) => {
                let position = self.position_at(self.lexer.span().start);
                Err(ProgramError::Lexical {
                    text: self.lexer.slice().to_string(),
                    position,
                })
            }
        }
    }

    fn position_at(&mut self, offset: usize) -> Position {
        let source = self.lexer.source();
        for (index, ch) in source[self.scanned..offset].char_indices() {
            if ch == '\n' {
                self.line += 1;
                self.line_start = self.scanned + index + 1;
            }
        }
        self.scanned = offset;
        Position::new(self.line, source[self.line_start..offset].chars().count() + 1)
    }
}

/// Scans the whole input. The end-of-input lexeme is not included.
pub fn lexer(input: &str) -> Result<Vec<Lexeme>> {
    let mut tokenizer = Tokenizer::new(input);
    let mut lexemes = Vec::new();
    loop {
        let lexeme = tokenizer.next_token()?;
        if lexeme.token.is_none() {
            break;
        }
        lexemes.push(lexeme);
    }
    Ok(lexemes)
}
