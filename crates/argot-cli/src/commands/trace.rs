use std::path::PathBuf;

use argot_lib::{Colors, Error, ParseLimits, Verbosity};

use super::definition_loader::load_syntax;
use super::line_loader::{LineInput, load_line};
use super::output::to_json;

pub struct TraceArgs {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub input: LineInput,
    pub steps: u32,
    pub allow_trailing: bool,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
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
    let colors = Colors::new(args.color);

    let (result, lines) = syntax.trace(&line, limits, args.verbosity, colors);
    for trace_line in &lines {
        println!("{trace_line}");
    }

    let bundle = match result {
        Ok(bundle) => bundle,
        Err(Error::Syntax(diagnostic)) => {
            println!("{}---{}", colors.dim, colors.reset);
            eprintln!("{}", diagnostic.render_colored(line.source(), args.color));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            std::process::exit(2);
        }
    };

    if args.no_result {
        return;
    }

    println!("{}---{}", colors.dim, colors.reset);
    println!("{}", to_json(&bundle, false));
}
