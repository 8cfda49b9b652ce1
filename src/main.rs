use std::{fs, process::ExitCode};

use clap::Parser;
use gravity::run;

/// gravity is a small scripting language with integers, functions and
/// structured control flow.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells gravity to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the value of the last top-level
    /// expression after the script's own output.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run(&script) {
        Ok(trace) => {
            for line in &trace.output {
                println!("{line}");
            }
            if args.pipe_mode
               && let Some(value) = trace.value
            {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
