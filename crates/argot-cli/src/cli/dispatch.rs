//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use argot_lib::Verbosity;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::complete::CompleteArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::line_loader::LineInput;
use crate::commands::parse::ParseArgs;
use crate::commands::tokens::TokensArgs;
use crate::commands::trace::TraceArgs;

const DEFAULT_STEPS: u32 = 10_000;

/// Line input as given on the command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LineParams {
    pub line: Option<String>,
    pub words: Vec<String>,
    pub redirects: bool,
    pub comments: bool,
}

impl LineParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            line: m.get_one::<String>("line").cloned(),
            words: m
                .get_many::<String>("words")
                .map(|words| words.cloned().collect())
                .unwrap_or_default(),
            redirects: m.get_flag("redirects"),
            comments: m.get_flag("comments"),
        }
    }
}

impl From<LineParams> for LineInput {
    fn from(p: LineParams) -> Self {
        Self {
            line: p.line,
            words: p.words,
            redirects: p.redirects,
            comments: p.comments,
        }
    }
}

pub struct TokensParams {
    pub input: LineParams,
    pub compact: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: LineParams::from_matches(m),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input.into(),
            compact: p.compact,
        }
    }
}

pub struct CheckParams {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub color: ColorChoice,
    // Note: line, steps and trace flags are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition_path: m.get_one::<PathBuf>("definition_path").cloned(),
            definition_text: m.get_one::<String>("definition_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            definition_path: p.definition_path,
            definition_text: p.definition_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition_path: m.get_one::<PathBuf>("definition_path").cloned(),
            definition_text: m.get_one::<String>("definition_text").cloned(),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            definition_path: p.definition_path,
            definition_text: p.definition_text,
        }
    }
}

pub struct ParseParams {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub input: LineParams,
    pub steps: u32,
    pub allow_trailing: bool,
    pub compact: bool,
    pub color: ColorChoice,
    // Note: verbose and no_result are parsed but not extracted (unified flags)
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition_path: m.get_one::<PathBuf>("definition_path").cloned(),
            definition_text: m.get_one::<String>("definition_text").cloned(),
            input: LineParams::from_matches(m),
            steps: parse_steps(m),
            allow_trailing: m.get_flag("allow_trailing"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            definition_path: p.definition_path,
            definition_text: p.definition_text,
            input: p.input.into(),
            steps: p.steps,
            allow_trailing: p.allow_trailing,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub input: LineParams,
    pub steps: u32,
    pub allow_trailing: bool,
    pub verbose: u8,
    pub no_result: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition_path: m.get_one::<PathBuf>("definition_path").cloned(),
            definition_text: m.get_one::<String>("definition_text").cloned(),
            input: LineParams::from_matches(m),
            steps: parse_steps(m),
            allow_trailing: m.get_flag("allow_trailing"),
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            definition_path: p.definition_path,
            definition_text: p.definition_text,
            input: p.input.into(),
            steps: p.steps,
            allow_trailing: p.allow_trailing,
            verbosity,
            no_result: p.no_result,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompleteParams {
    pub definition_path: Option<PathBuf>,
    pub definition_text: Option<String>,
    pub input: LineParams,
    pub steps: u32,
    pub compact: bool,
}

impl CompleteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            definition_path: m.get_one::<PathBuf>("definition_path").cloned(),
            definition_text: m.get_one::<String>("definition_text").cloned(),
            input: LineParams::from_matches(m),
            steps: parse_steps(m),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<CompleteParams> for CompleteArgs {
    fn from(p: CompleteParams) -> Self {
        Self {
            definition_path: p.definition_path,
            definition_text: p.definition_text,
            input: p.input.into(),
            steps: p.steps,
            compact: p.compact,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_steps(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("steps").copied().unwrap_or(DEFAULT_STEPS)
}
