//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands, hidden (via `.hide(true)`)
//! where it does not apply.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Command definition file (positional).
pub fn definition_path_arg() -> Arg {
    Arg::new("definition_path")
        .value_name("DEFINITION")
        .value_parser(value_parser!(PathBuf))
        .help("Command definition file (JSON), or - for stdin")
}

/// Inline command definition (-d/--definition).
pub fn definition_text_arg() -> Arg {
    Arg::new("definition_text")
        .short('d')
        .long("definition")
        .value_name("JSON")
        .conflicts_with("definition_path")
        .help("Inline command definition")
}

/// Raw command line (-l/--line).
pub fn line_arg() -> Arg {
    Arg::new("line")
        .short('l')
        .long("line")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .conflicts_with("words")
        .help("Command line to tokenize, with shell-style quoting")
}

/// Pre-split words (everything after `--`).
pub fn words_arg() -> Arg {
    Arg::new("words")
        .value_name("WORDS")
        .num_args(1..)
        .last(true)
        .help("Words taken as-is, one token each")
}

/// Treat `<`, `>` and `|` as redirections (--redirects).
pub fn redirects_arg() -> Arg {
    Arg::new("redirects")
        .long("redirects")
        .action(ArgAction::SetTrue)
        .help("Split off redirection characters as special tokens")
}

/// Strip `#` comments (--comments).
pub fn comments_arg() -> Arg {
    Arg::new("comments")
        .long("comments")
        .action(ArgAction::SetTrue)
        .help("Ignore everything after an unquoted #")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Search step limit (--steps).
pub fn steps_arg() -> Arg {
    Arg::new("steps")
        .long("steps")
        .value_name("N")
        .default_value("10000")
        .value_parser(value_parser!(u32).range(1..))
        .help("Give up after N parser steps")
}

/// Accept lines with unconsumed tokens (--allow-trailing).
pub fn allow_trailing_arg() -> Arg {
    Arg::new("allow_trailing")
        .long("allow-trailing")
        .action(ArgAction::SetTrue)
        .help("Accept a prefix of the line and report the rest")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Skip printing the bindings (--no-result).
pub fn no_result_arg() -> Arg {
    Arg::new("no_result")
        .long("no-result")
        .action(ArgAction::SetTrue)
        .help("Show the trace only")
}
