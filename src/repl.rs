//! Interactive read-parse-print loop.
//!
//! Reads one line at a time, parses it as a Jay program, and prints the
//! rendered AST or the parse errors. The loop ends on `exit` or end of
//! input.

use std::io::{self, BufRead, Write};

use jay::lexer::Lexer;
use jay::parser::Parser;

use crate::diagnostics;

const PROMPT: &str = ">>";
const EXIT: &str = "exit";

/// Runs the REPL over stdin/stdout until `exit` or end of input.
pub(crate) fn start() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        if line == EXIT {
            writeln!(stdout, "bye")?;
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse();

        if parser.errors().is_empty() {
            writeln!(stdout, "{}", program.render())?;
        } else {
            diagnostics::report_parse_errors("<repl>", &line, parser.errors());
        }
    }
}
