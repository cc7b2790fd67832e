//! The completion-mode entry point.
//!
//! Shell integration works the bash way: the shell re-invokes the program
//! itself with a marker argument and passes the attempted command line in
//! the `COMP_LINE` / `COMP_POINT` environment variables, e.g.:
//!
//! ```text
//! complete -C 'myprog -do-completion' myprog
//! ```
//!
//! [`complete_if_requested`] detects that invocation, prints the
//! completions, and exits -- normal program execution never starts. All
//! the actual work happens in [`run_completion`], which only talks to the
//! caller-supplied inputs and writer so it can be tested without touching
//! a real process.
use std::io::Write;

use crate::completion::Completer;
use crate::line_parser::{parse_line, CommandLine};

/// The marker argument that requests completion mode.
pub const COMPLETION_ARG: &str = "-do-completion";

const COMP_LINE_VAR: &str = "COMP_LINE";
const COMP_POINT_VAR: &str = "COMP_POINT";

/// Returns true if the process arguments request completion mode: the
/// first argument after the program name is exactly [`COMPLETION_ARG`].
pub fn completion_requested(args: &[String]) -> bool {
    args.len() > 1 && args[1] == COMPLETION_ARG
}

/// Performs the completion-mode work against the given `COMP_LINE` /
/// `COMP_POINT` values: tokenizes the line up to the cursor, drops the
/// program name, invokes `completer`, and writes one candidate per line
/// into `out`. Returns the process exit status.
///
/// An unset (or empty) variable and a cursor offset that is not an
/// unsigned integer are reported on stderr and yield a non-zero status;
/// zero candidates is still a success.
pub fn run_completion<W: Write>(
    line: Option<&str>,
    point: Option<&str>,
    completer: &dyn Completer,
    out: &mut W,
) -> i32 {
    let (line, point_str) = match (line, point) {
        (Some(line), Some(point)) if !line.is_empty() && !point.is_empty() => (line, point),
        _ => {
            print_err!("completion requested, but COMP_LINE and/or COMP_POINT unset");
            return 1;
        }
    };

    let point = match point_str.parse::<usize>() {
        Ok(point) => point,
        Err(_) => {
            print_err!("invalid COMP_POINT `{}'", point_str);
            return 1;
        }
    };

    let words = parse_line(line, point);
    // Drop the first word -- the program name.
    let cl = CommandLine::new(words.words()[1..].to_vec());
    trace!("completion: point={}, words={:?}", point, cl.words());

    for word in completer.complete(&cl) {
        writeln!(out, "{}", word).ok();
    }

    0
}

/// The toplevel interface to completion. Call this early in `main` with
/// the program's completer: if the process was invoked in completion
/// mode, it prints the completions to stdout and exits; otherwise it does
/// nothing and normal execution proceeds.
pub fn complete_if_requested(completer: &dyn Completer) {
    let args: Vec<String> = std::env::args().collect();
    if !completion_requested(&args) {
        return;
    }

    let line = std::env::var(COMP_LINE_VAR).ok();
    let point = std::env::var(COMP_POINT_VAR).ok();
    let stdout = std::io::stdout();
    let status = run_completion(
        line.as_ref().map(String::as_str),
        point.as_ref().map(String::as_str),
        completer,
        &mut stdout.lock(),
    );

    std::process::exit(status);
}
