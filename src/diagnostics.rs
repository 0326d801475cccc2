//! Labeled diagnostic reports for the CLI.
//!
//! Parse errors carry byte spans; this module turns them into ariadne
//! reports against the offending source, with a plain-text fallback when
//! the report itself cannot be written.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use jay::parser::ParseError;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Returns a one-byte range at the end of the source, for errors whose
/// span is empty (an unexpected `Eof`, for example).
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        source.len().saturating_sub(1)..source.len()
    }
}

fn label_range(source: &str, error: &ParseError) -> Range<usize> {
    let span = error.span();
    if span.start < span.end {
        span.start..span.end
    } else {
        end_of_source_range(source)
    }
}

/// Reports each parse error against the source it came from.
pub(crate) fn report_parse_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        let range = label_range(source, error);
        if let Err(report_err) = print_range_report(filename, source, range, error.message()) {
            eprintln!(
                "Error: {} (at {}:{})",
                error.message(),
                error.span().line,
                error.span().column
            );
            eprintln!("(Failed to display detailed error report: {})", report_err);
        }
    }
}
