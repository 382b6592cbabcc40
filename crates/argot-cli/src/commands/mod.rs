pub mod check;
pub mod complete;
pub mod definition_loader;
pub mod dump;
pub mod line_loader;
mod output;
pub mod parse;
pub mod tokens;
pub mod trace;
