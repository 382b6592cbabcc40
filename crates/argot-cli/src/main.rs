mod cli;
mod commands;

use cli::{
    CheckParams, CompleteParams, DumpParams, ParseParams, TokensParams, TraceParams, build_cli,
};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("parse", m)) => {
            let params = ParseParams::from_matches(m);
            commands::parse::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("complete", m)) => {
            let params = CompleteParams::from_matches(m);
            commands::complete::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
