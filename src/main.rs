//! The Jay language CLI.
//!
//! This binary provides `jay repl` and `jay parse` commands over the
//! front-end library: an interactive read-parse-print loop, and a file
//! driver that prints the rendered AST (or the token stream).

use clap::{Parser, Subcommand};

use jay::lexer::Lexer;

mod diagnostics;
mod repl;

/// Command-line interface for the Jay front-end.
#[derive(Parser)]
#[command(name = "jay")]
#[command(about = "The Jay language front-end", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start an interactive read-parse-print loop.
    Repl,
    /// Parse a Jay source file and print the rendered program.
    Parse {
        /// The source file to parse (e.g., `program.jay`).
        file: String,

        /// Print the token stream instead of the parsed program.
        #[arg(long = "tokens")]
        tokens: bool,
    },
}

/// Entry point for the Jay CLI.
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Repl => {
            if let Err(error) = repl::start() {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }
        }
        Commands::Parse { file, tokens } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(source) => source,
                Err(error) => {
                    eprintln!("Error: failed to read '{}': {}", file, error);
                    std::process::exit(1);
                }
            };

            if tokens {
                dump_tokens(&source);
                return;
            }

            let mut parser = jay::parser::Parser::new(Lexer::new(&source));
            let program = parser.parse();

            if parser.errors().is_empty() {
                println!("{}", program.render());
            } else {
                diagnostics::report_parse_errors(&file, &source, parser.errors());
                std::process::exit(1);
            }
        }
    }
}

/// Prints one token per line: kind, quoted lexeme, and position.
fn dump_tokens(source: &str) {
    let mut lexer = Lexer::new(source);
    for token in lexer.tokenize() {
        println!(
            "{} {:?} {}:{}",
            token.kind, token.lexeme, token.span.line, token.span.column
        );
    }
}
