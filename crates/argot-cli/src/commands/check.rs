use std::path::PathBuf;

use argot_lib::Colors;

use super::definition_loader::load_syntax;

pub struct CheckArgs {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(e) = load_syntax(
        args.definition_path.as_deref(),
        args.definition_text.as_deref(),
    ) {
        let c = Colors::new(args.color);
        eprintln!("{}error{}: {e}", c.red, c.reset);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
