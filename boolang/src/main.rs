use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use boolang::prelude::*;
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::info;

/// boolang runs programs of assignments and prints over boolean expressions.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells boolang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Only check the program against the grammar, without evaluating it.
    #[arg(short, long)]
    check: bool,

    /// Print the variables and their final values after the program ran.
    #[arg(short, long)]
    show_variables: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let status = run_cli(&args, &mut io::stdout().lock(), &mut io::stderr());
    ExitCode::from(status)
}

/// Runs the command and reports a failure to `err`. Returns the exit status.
fn run_cli(args: &Args, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    match execute(args, out) {
        Ok(()) => 0,
        Err(e) => {
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(err, "{}", report(&e));
            1
        }
    }
}

fn execute(args: &Args, out: &mut dyn Write) -> Result<()> {
    let script = if args.file {
        info!("reading program from {}", args.contents);
        std::fs::read_to_string(&args.contents).with_context(|| {
            format!(
                "Failed to read the input file '{}'. Perhaps this file does not exist?",
                args.contents
            )
        })?
    } else {
        args.contents.clone()
    };

    if args.check {
        check(&script)?;
        writeln!(out, "ok").context("Error writing output")?;
        return Ok(());
    }

    let mut output = WriteOutput::new(&mut *out);
    let symbols = run_with_output(&script, &mut output)?;
    drop(output);
    info!("program finished");

    if args.show_variables {
        for (name, value) in symbols.iter().sorted_by_key(|(name, _)| *name) {
            writeln!(out, "{} = {}", name, value).context("Error writing output")?;
        }
    }
    Ok(())
}
