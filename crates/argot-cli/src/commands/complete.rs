use std::path::PathBuf;

use argot_lib::ParseLimits;

use super::definition_loader::load_syntax;
use super::line_loader::{LineInput, load_line};
use super::output::{exit_with, to_json};

pub struct CompleteArgs {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub input: LineInput,
    pub steps: u32,
    pub compact: bool,
}

pub fn run(args: CompleteArgs) {
    let syntax = load_syntax(
        args.definition_path.as_deref(),
        args.definition_text.as_deref(),
    )
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    let line = load_line(&args.input);
    let limits = ParseLimits::new().step_limit(args.steps);

    let completion = syntax
        .complete(&line, limits)
        .unwrap_or_else(|e| exit_with(e, &line, false));
    println!("{}", to_json(&completion, args.compact));
}
