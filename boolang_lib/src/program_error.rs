use crate::tokens::{Position, TokenKind};
use itertools::Itertools;

use thiserror::Error;
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProgramError {
    #[error("Unrecognized input '{text}'")]
    Lexical { text: String, position: Position },

    #[error(
        "Found '{found}' instead of {}",
        .expected.iter().map(|kind| format!("'{}'", kind)).join(", ")
    )]
    Syntax {
        found: TokenKind,
        expected: Vec<TokenKind>,
        position: Position,
    },

    #[error("Uninitialized variable {name}")]
    UninitializedVariable { name: String, position: Position },

    #[error("Parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ProgramError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lexical { .. } => "LexicalError",
            Self::Syntax { .. } => "SyntaxError",
            Self::UninitializedVariable { .. } => "UninitializedVariableError",
            Self::NestingTooDeep { .. } => "NestingTooDeepError",
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Lexical { position, .. }
            | Self::Syntax { position, .. }
            | Self::UninitializedVariable { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }

    /// One line report: kind, message and position.
    pub fn report(&self) -> String {
        format!("{}: {} at {}", self.kind(), self, self.position())
    }
}

/// Formats any error coming out of a run. Errors outside the language
/// taxonomy (I/O) keep their full context chain.
pub fn report(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ProgramError>() {
        Some(program_error) => program_error.report(),
        None => format!("Error: {:#}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_syntax_error_message() {
        let err = ProgramError::Syntax {
            found: TokenKind::And,
            expected: vec![
                TokenKind::LParen,
                TokenKind::Var,
                TokenKind::True,
                TokenKind::False,
            ],
            position: Position::new(1, 7),
        };
        assert_eq!(
            err.report(),
            "SyntaxError: Found 'and' instead of '(', 'variable', 'true', 'false' at line 1 char 7"
        );
    }

    #[test]
    fn test_syntax_error_message_with_or_expected() {
        let err = ProgramError::Syntax {
            found: TokenKind::Equals,
            expected: vec![TokenKind::Or, TokenKind::RParen, TokenKind::End],
            position: Position::new(1, 9),
        };
        assert_eq!(
            err.to_string(),
            "Found '=' instead of 'or', ')', 'end of input'"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        let position = Position::new(2, 1);
        let errors = [
            ProgramError::Lexical {
                text: "&".to_string(),
                position,
            },
            ProgramError::Syntax {
                found: TokenKind::End,
                expected: vec![TokenKind::RParen],
                position,
            },
            ProgramError::UninitializedVariable {
                name: "x".to_string(),
                position,
            },
            ProgramError::NestingTooDeep {
                limit: 256,
                position,
            },
        ];
        let kinds: Vec<&str> = errors.iter().map(ProgramError::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "LexicalError",
                "SyntaxError",
                "UninitializedVariableError",
                "NestingTooDeepError"
            ]
        );
        assert!(errors.iter().all(|e| e.position() == position));
    }

    #[test]
    fn test_report_through_anyhow() {
        let err: anyhow::Error = ProgramError::UninitializedVariable {
            name: "y".to_string(),
            position: Position::new(3, 9),
        }
        .into();
        assert_eq!(
            report(&err),
            "UninitializedVariableError: Uninitialized variable y at line 3 char 9"
        );

        let other = anyhow!("disk on fire").context("Error writing output");
        assert_eq!(report(&other), "Error: Error writing output: disk on fire");
    }
}
