//! boolang is a minimal language of boolean expressions.
//!
//! A program is a list of statements, each either an assignment `x = expr` or `print expr`.
//! Expressions combine `true`/`false` (also spelled `t`/`f`/`1`/`0`, in any case), variables,
//! `not`, `and`, `or` and parentheses. `not` binds tightest, then `and`, then `or`.
//!
//! Programs are evaluated while they are parsed. Every operand of `and`/`or` is evaluated,
//! so reading a variable that was never assigned is an error even where it cannot change
//! the result.
//!
//! ```
//! use boolang::prelude::*;
//!
//! let printed = run("x = t print not x and f or x").unwrap();
//! assert_eq!(printed, vec![true]);
//! ```

pub mod prelude {
    pub use boolang_lib::{
        check, report, run, run_file, run_with_output, Mode, Output, Parser, ProgramError,
        SymbolTable, WriteOutput,
    };
    pub use boolang_macro::boolang;
}
