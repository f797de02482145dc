use std::io::{self, BufRead};

use aritree::evaluate;
use clap::Parser;

/// aritree is a small calculator for integer arithmetic expressions with
/// `+`, `-`, `*`, `/` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. When omitted, one line is read from
    /// standard input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let expression = args.expression.unwrap_or_else(|| {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            eprintln!("Failed to read an expression from standard input.");
            std::process::exit(1);
        }
        line
    });

    match evaluate(&expression) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
