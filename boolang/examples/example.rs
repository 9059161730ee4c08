use boolang::prelude::*;

#[boolang]
fn exclusive_or_table() -> Vec<bool> {
    r#"
    a = f b = f print (a or b) and not (a and b)
    a = f b = t print (a or b) and not (a and b)
    a = t b = f print (a or b) and not (a and b)
    a = t b = t print (a or b) and not (a and b)
    "#
}

fn main() {
    println!("{:?}", exclusive_or_table());
}
