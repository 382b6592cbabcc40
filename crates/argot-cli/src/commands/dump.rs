use std::path::PathBuf;

use super::definition_loader::load_syntax;

pub struct DumpArgs {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
}

pub fn run(args: DumpArgs) {
    let syntax = load_syntax(
        args.definition_path.as_deref(),
        args.definition_text.as_deref(),
    )
    .unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    match syntax.description() {
        Some(description) => println!("# {}: {description}", syntax.alias()),
        None => println!("# {}", syntax.alias()),
    }
    print!("{}", syntax.grammar().dump());
}
