//! Command-line shell over the remask library.
//!
//! Compiles the pattern once, then formats each value or dumps the
//! compiled mask. All logic lives in the library.

use clap::{Parser, Subcommand};
use remask::diagnostics::print_error;

#[derive(Debug, Parser)]
#[command(
    name = "remask",
    version,
    about = "Format raw input against a mask pattern."
)]
struct RemaskArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a pattern once and format each value against it.
    Format {
        /// The mask pattern, e.g. "0{3}:-:0{2}".
        pattern: String,
        /// Raw values to format, one output line each.
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Show the compiled form of a pattern.
    Inspect {
        pattern: String,
        /// Emit the compiled AST as JSON instead of canonical pattern text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = RemaskArgs::parse();
    if let Err(error) = run(args) {
        print_error(error);
        std::process::exit(1);
    }
}

fn run(args: RemaskArgs) -> Result<(), remask::MaskError> {
    match args.command {
        Command::Format { pattern, values } => {
            let formatter = remask::compile(&pattern)?;
            for value in &values {
                println!("{}", formatter.format(value));
            }
        }
        Command::Inspect { pattern, json } => {
            let formatter = remask::compile(&pattern)?;
            if json {
                match serde_json::to_string_pretty(formatter.mask()) {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("could not serialize mask: {err}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", formatter.mask().pretty());
            }
        }
    }
    Ok(())
}
