//! Expression rules. Each rule returns the value of the input it recognized.
//!
//! Both operands of `and`/`or` are always evaluated before they are
//! combined, so reading an unassigned variable fails even where the result
//! is already decided by the left operand.

use super::{Parser, FACTOR_FIRST, FACTOR_TAIL_FOLLOW, MAX_NESTING, TERM_TAIL_FOLLOW};
use crate::program_error::ProgramError;
use crate::tokens::TokenKind;
use anyhow::Result;

impl Parser<'_, '_> {
    /// `expr -> term term_tail`
    pub(super) fn expr(&mut self) -> Result<bool> {
        let term = self.term()?;
        let tail = self.term_tail()?;
        Ok(match tail {
            Some(rest) => term || rest,
            None => term,
        })
    }

    /// `term_tail -> or term term_tail | ε`
    ///
    /// Yields the value of the rest of the `or` chain, or `None` when there
    /// is no tail. The chain is folded in a loop; `or` is associative, so
    /// the value is the same as folding from the right.
    fn term_tail(&mut self) -> Result<Option<bool>> {
        let mut tail = None;
        loop {
            match self.lookahead.kind() {
                TokenKind::Or => {
                    self.match_token(TokenKind::Or)?;
                    let term = self.term()?;
                    tail = Some(tail.map_or(term, |rest: bool| rest || term));
                }
                kind if TERM_TAIL_FOLLOW.contains(&kind) => return Ok(tail),
                _ => {
                    let expected: Vec<TokenKind> = std::iter::once(TokenKind::Or)
                        .chain(TERM_TAIL_FOLLOW)
                        .collect();
                    return Err(self.unexpected(&expected));
                }
            }
        }
    }

    /// `term -> [not] factor factor_tail`
    ///
    /// A leading `not` negates the first factor only.
    fn term(&mut self) -> Result<bool> {
        let negate = self.not_op()?;
        let factor = self.factor()?;
        let first = if negate { !factor } else { factor };
        let tail = self.factor_tail()?;
        Ok(match tail {
            Some(rest) => first && rest,
            None => first,
        })
    }

    /// `factor_tail -> and [not] factor factor_tail | ε`
    ///
    /// Folded in a loop like `term_tail`.
    fn factor_tail(&mut self) -> Result<Option<bool>> {
        let mut tail = None;
        loop {
            match self.lookahead.kind() {
                TokenKind::And => {
                    self.match_token(TokenKind::And)?;
                    let negate = self.not_op()?;
                    let factor = self.factor()?;
                    let value = if negate { !factor } else { factor };
                    tail = Some(tail.map_or(value, |rest: bool| rest && value));
                }
                kind if FACTOR_TAIL_FOLLOW.contains(&kind) => return Ok(tail),
                _ => {
                    let expected: Vec<TokenKind> = std::iter::once(TokenKind::And)
                        .chain(FACTOR_TAIL_FOLLOW)
                        .collect();
                    return Err(self.unexpected(&expected));
                }
            }
        }
    }

    /// `factor -> ( expr ) | VAR | true | false`
    fn factor(&mut self) -> Result<bool> {
        match self.lookahead.kind() {
            TokenKind::LParen => {
                if self.depth == MAX_NESTING {
                    return Err(ProgramError::NestingTooDeep {
                        limit: MAX_NESTING,
                        position: self.lookahead.position,
                    }
                    .into());
                }
                self.match_token(TokenKind::LParen)?;
                self.depth += 1;
                let value = self.expr()?;
                self.depth -= 1;
                self.match_token(TokenKind::RParen)?;
                Ok(value)
            }
            TokenKind::Var => {
                let (name, position) = self.match_variable()?;
                if !self.evaluating() {
                    return Ok(false);
                }
                self.symbols
                    .lookup(&name)
                    .ok_or_else(|| ProgramError::UninitializedVariable { name, position }.into())
            }
            TokenKind::True => {
                self.match_token(TokenKind::True)?;
                Ok(true)
            }
            TokenKind::False => {
                self.match_token(TokenKind::False)?;
                Ok(false)
            }
            _ => Err(self.unexpected(&FACTOR_FIRST)),
        }
    }

    /// Consumes an optional `not` and reports whether it was there.
    fn not_op(&mut self) -> Result<bool> {
        if self.lookahead.kind() == TokenKind::Not {
            self.match_token(TokenKind::Not)?;
            return Ok(true);
        }
        Ok(false)
    }
}
