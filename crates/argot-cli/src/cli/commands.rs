//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Commands that take a definition accept every runtime flag, with the
//! irrelevant ones hidden from `--help`, so switching between `parse`,
//! `trace` and `check` only means changing the subcommand.

use clap::Command;

use super::args::*;

/// Definition input, shared by every command except `tokens`.
fn with_definition_args(cmd: Command) -> Command {
    cmd.arg(definition_path_arg()).arg(definition_text_arg())
}

/// Line input and tokenizer switches.
fn with_line_args(cmd: Command) -> Command {
    cmd.arg(line_arg())
        .arg(words_arg())
        .arg(redirects_arg())
        .arg(comments_arg())
}

fn with_hidden_line_args(cmd: Command) -> Command {
    cmd.arg(line_arg().hide(true))
        .arg(words_arg().hide(true))
        .arg(redirects_arg().hide(true))
        .arg(comments_arg().hide(true))
}

fn with_hidden_parse_args(cmd: Command) -> Command {
    cmd.arg(steps_arg().hide(true))
        .arg(allow_trailing_arg().hide(true))
        .arg(compact_arg().hide(true))
}

fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("argot")
        .about("Declarative command-line syntax: check definitions, parse and complete lines")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(parse_command())
        .subcommand(trace_command())
        .subcommand(complete_command())
}

/// Show how a line splits into tokens.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the tokens of a command line")
        .override_usage(
            "\
  argot tokens -l <TEXT>
  argot tokens -- <WORDS>...",
        )
        .after_help(
            r#"EXAMPLES:
  argot tokens -l 'cp -v "my file" dest'     # shell-style quoting
  argot tokens -l 'sort < in > out' --redirects
  argot tokens -l 'ls # list' --comments"#,
        )
        .arg(compact_arg());

    with_line_args(cmd)
}

/// Validate a command definition.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a command definition")
        .override_usage(
            "\
  argot check <DEFINITION>
  argot check -d <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  argot check cp.json                 # silent when valid
  cat cp.json | argot check -         # from stdin"#,
        )
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_parse_args(with_hidden_line_args(
        with_definition_args(cmd),
    )))
}

/// Show the compiled grammar.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled grammar")
        .override_usage(
            "\
  argot dump <DEFINITION>
  argot dump -d <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  argot dump cp.json                  # one line per grammar node"#,
        )
        .arg(color_arg().hide(true));

    with_hidden_trace_args(with_hidden_parse_args(with_hidden_line_args(
        with_definition_args(cmd),
    )))
}

/// Parse a line and print its bindings as JSON.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse a command line and print the bound arguments as JSON")
        .override_usage(
            "\
  argot parse <DEFINITION> -l <TEXT>
  argot parse <DEFINITION> -- <WORDS>...
  argot parse -d <JSON> -l <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  argot parse cp.json -l '-v a b dest'        # raw line
  argot parse cp.json -- -v a b dest          # pre-split words
  argot parse cp.json -l 'a b | wc' --redirects --allow-trailing"#,
        )
        .arg(steps_arg())
        .arg(allow_trailing_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_line_args(with_definition_args(cmd)))
}

/// Parse a line and print every step of the search.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the parser's search for debugging")
        .override_usage(
            "\
  argot trace <DEFINITION> -l <TEXT>
  argot trace <DEFINITION> -- <WORDS>...",
        )
        .after_help(
            r#"EXAMPLES:
  argot trace cp.json -l '-vf a dest'         # consuming nodes only
  argot trace cp.json -l '-vf a dest' -vv     # with checkpoints and failures"#,
        )
        .arg(steps_arg())
        .arg(allow_trailing_arg())
        .arg(verbose_arg())
        .arg(no_result_arg())
        .arg(color_arg());

    with_line_args(with_definition_args(cmd.arg(compact_arg().hide(true))))
}

/// List completion candidates for the last word.
pub fn complete_command() -> Command {
    let cmd = Command::new("complete")
        .about("List completion candidates for the word being typed")
        .override_usage(
            "\
  argot complete <DEFINITION> -l <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  argot complete cp.json -l '--mo'            # complete a partial word
  argot complete cp.json -l '--mode '         # offer the next word"#,
        )
        .arg(steps_arg())
        .arg(compact_arg())
        .arg(allow_trailing_arg().hide(true));

    with_hidden_trace_args(with_line_args(with_definition_args(cmd.arg(color_arg().hide(true)))))
}
