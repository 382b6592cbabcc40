//! Syntax derived from an argument bundle alone.

use argot_core::{ArgumentBundle, Count, Requiredness};

use crate::syntax::{OptionSyntax, Syntax};

/// Builds the syntax used by commands that declare none.
///
/// Flags become `--name` options in one option set, followed by every other
/// argument as a positional in declaration order. Optional positionals may
/// be left out and multiple ones repeat.
pub fn default_syntax(bundle: &ArgumentBundle) -> Syntax {
    let mut items = Vec::new();

    let flags: Vec<OptionSyntax> = bundle
        .iter()
        .filter(|a| a.is_flag())
        .map(|a| OptionSyntax::new(a.name()).long(a.name()))
        .collect();
    if !flags.is_empty() {
        items.push(Syntax::option_set(flags));
    }

    for arg in bundle.iter().filter(|a| !a.is_flag()) {
        let value = Syntax::argument(arg.name());
        let m = arg.multiplicity();
        items.push(match (m.requiredness, m.count) {
            (Requiredness::Mandatory, Count::Single) => value,
            (Requiredness::Optional, Count::Single) => Syntax::optional(value),
            (Requiredness::Optional, Count::Multiple) => Syntax::repeat(value, 0, None),
            (Requiredness::Mandatory, Count::Multiple) => Syntax::repeat(value, 1, None),
        });
    }

    match items.len() {
        0 => Syntax::Empty,
        1 => items.remove(0),
        _ => Syntax::Sequence(items),
    }
}
