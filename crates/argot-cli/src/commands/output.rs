use argot_lib::{CommandLine, Error};
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.unwrap_or_else(|e| {
        eprintln!("error: failed to serialize output: {e}");
        std::process::exit(2);
    })
}

/// Reports a failed parse and exits.
///
/// A line that does not match exits with 1 and a caret diagnostic; giving
/// up on the search or an internal error exits with 2.
pub fn exit_with(error: Error, line: &CommandLine, color: bool) -> ! {
    match error {
        Error::Syntax(diagnostic) => {
            eprintln!("{}", diagnostic.render_colored(line.source(), color));
            std::process::exit(1);
        }
        other => {
            eprintln!("error: {other}");
            std::process::exit(2);
        }
    }
}
