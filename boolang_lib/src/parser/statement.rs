use super::{Parser, STMT_FIRST};
use crate::tokens::TokenKind;
use anyhow::Result;
use log::debug;

impl Parser<'_, '_> {
    /// `stmt_list -> stmt stmt_list | ε`. End of input is the only
    /// accepting condition.
    pub(super) fn stmt_list(&mut self) -> Result<()> {
        loop {
            match self.lookahead.kind() {
                TokenKind::Var | TokenKind::Print => self.stmt()?,
                TokenKind::End => return Ok(()),
                _ => {
                    return Err(self.unexpected(&[
                        TokenKind::Var,
                        TokenKind::Print,
                        TokenKind::End,
                    ]))
                }
            }
        }
    }

    /// `stmt -> VAR = expr | print expr`
    fn stmt(&mut self) -> Result<()> {
        match self.lookahead.kind() {
            TokenKind::Var => {
                let (name, _) = self.match_variable()?;
                self.match_token(TokenKind::Equals)?;
                let value = self.expr()?;
                if self.evaluating() {
                    debug!("{} = {}", name, value);
                    self.symbols.assign(&name, value);
                }
                Ok(())
            }
            TokenKind::Print => {
                self.match_token(TokenKind::Print)?;
                let value = self.expr()?;
                if self.evaluating() {
                    debug!("print {}", value);
                    self.output.emit(value)?;
                }
                Ok(())
            }
            _ => Err(self.unexpected(&STMT_FIRST)),
        }
    }
}
