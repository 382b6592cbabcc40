use std::path::PathBuf;

use argot_lib::{ArgumentBundle, ParseLimits};
use serde::Serialize;

use super::definition_loader::load_syntax;
use super::line_loader::{LineInput, load_line};
use super::output::{exit_with, to_json};

pub struct ParseArgs {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub input: LineInput,
    pub steps: u32,
    pub allow_trailing: bool,
    pub compact: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct ParseReport<'a> {
    command: &'a str,
    arguments: &'a ArgumentBundle,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trailing: Vec<&'a str>,
}

pub fn run(args: ParseArgs) {
    let syntax = load_syntax(
        args.definition_path.as_deref(),
        args.definition_text.as_deref(),
    )
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    let line = load_line(&args.input);
    let limits = ParseLimits::new()
        .step_limit(args.steps)
        .allow_trailing(args.allow_trailing);

    let mut bundle = syntax.new_bundle();
    let parsed = syntax
        .parse(&line, &mut bundle, limits)
        .unwrap_or_else(|e| exit_with(e, &line, args.color));

    let report = ParseReport {
        command: syntax.alias(),
        arguments: &bundle,
        trailing: parsed
            .trailing(&line)
            .iter()
            .map(|t| t.text.as_str())
            .collect(),
    };
    println!("{}", to_json(&report, args.compact));
}
