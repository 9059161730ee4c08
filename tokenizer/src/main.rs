use anyhow::Result;
use boolang_lib::tokens::Tokenizer;
use std::io::Read;

/// Dumps the token stream of a boolang program read from stdin, one token per line.
fn main() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut tokenizer = Tokenizer::new(&input);

    loop {
        let lexeme = tokenizer.next_token()?;
        println!("{:?}\t{}", lexeme.token, lexeme.position);
        if lexeme.token.is_none() {
            break;
        }
    }
    Ok(())
}
