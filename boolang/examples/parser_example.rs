use anyhow::Result;
use boolang::prelude::*;
use boolang_lib::tokens::lexer;

static INPUT: &str = r#"
x = true
y = not x or F
print x and not y
z = (x or y) and not (x and y)
print z
print not z and x or y
"#;

fn main() -> Result<()> {
    for lexeme in lexer(INPUT)? {
        println!("{}", lexeme);
    }

    let mut output = WriteOutput::new(std::io::stdout());
    let symbols = run_with_output(INPUT, &mut output)?;
    for (name, value) in symbols.iter() {
        println!("{} = {}", name, value);
    }

    if let Err(e) = run("print x") {
        println!("{}", report(&e));
    }
    Ok(())
}
