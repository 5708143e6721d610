//! Command-line front end for the explainer.
//!
//! Usage:
//!   rexplain `<pattern>` [-x] [-n] [--at `<offset>`]

use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, value_parser};
use rexplain::{Error, Explanation, Location, NEWLINE, Options, Parser};

fn main() -> ExitCode {
    let matches = Command::new("rexplain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explains a regular expression in plain English")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pattern")
                .help("The regular expression to explain")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("ignore-whitespace")
                .long("ignore-whitespace")
                .short('x')
                .help("Skip unescaped whitespace and treat '#' as a comment")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("explicit-capture")
                .long("explicit-capture")
                .short('n')
                .help("Treat unnamed parentheses as non-capturing groups")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("at")
                .long("at")
                .help("Also show which construct covers this glyph offset")
                .value_parser(value_parser!(usize)),
        )
        .get_matches();

    let Some(pattern) = matches.get_one::<String>("pattern") else {
        return ExitCode::FAILURE;
    };
    let options = Options::new()
        .with_ignore_whitespace(matches.get_flag("ignore-whitespace"))
        .with_explicit_capture(matches.get_flag("explicit-capture"));

    let mut parser = Parser::new(pattern, options);
    let explanation = match parser.parse() {
        Ok((sequence, table)) => Explanation::new(sequence, table),
        Err(err) => {
            let location = parser.error_location().unwrap_or(err.location());
            report(pattern, &err, location);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", explanation.render().replace(NEWLINE, "\n"));
    if let Some(&offset) = matches.get_one::<usize>("at") {
        println!();
        match explanation.lookup(offset) {
            Some(span) => println!("{}..={}: {}", span.start, span.end, span.text.trim_end()),
            None => println!("no construct at {offset}"),
        }
    }

    ExitCode::SUCCESS
}

/// Prints the error with the offending span underlined.
fn report(pattern: &str, err: &Error, location: Location) {
    eprintln!("error: {err}");
    eprintln!("  {pattern}");
    eprintln!(
        "  {}{}",
        " ".repeat(location.offset),
        "^".repeat(location.length.max(1))
    );
}
