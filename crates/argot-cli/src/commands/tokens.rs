use argot_lib::Token;
use serde::Serialize;

use super::line_loader::{LineInput, load_line};
use super::output::to_json;

pub struct TokensArgs {
    pub input: LineInput,
    pub compact: bool,
}

#[derive(Serialize)]
struct TokensReport<'a> {
    tokens: &'a [Token],
    whitespace_after_last: bool,
}

pub fn run(args: TokensArgs) {
    let line = load_line(&args.input);
    let report = TokensReport {
        tokens: line.tokens(),
        whitespace_after_last: line.whitespace_after_last(),
    };
    println!("{}", to_json(&report, args.compact));
}
