//! Text dump of a grammar arena.
//!
//! One line per node, in arena order:
//!
//! ```text
//! root: N3
//! N0: '--file'
//! N1: <file>
//! N2 [opts]: alt(N0 | ε)
//! N3: seq(N2, N1)
//! ```

use std::fmt::Write;

use crate::grammar::Grammar;
use crate::node::{NodeData, NodeKind};

impl Grammar {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        writeln!(out, "root: {}", self.root()).expect("String write never fails");
        for (id, data) in self.iter() {
            match data.label() {
                Some(label) => write!(out, "{id} [{label}]: "),
                None => write!(out, "{id}: "),
            }
            .expect("String write never fails");
            out.push_str(&data.summary());
            out.push('\n');
        }
        out
    }
}

impl NodeData {
    /// One-line rendering of the node, as it appears in [`Grammar::dump`].
    pub fn summary(&self) -> String {
        format_kind(&self.kind)
    }
}

fn format_kind(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Symbol(text) => format!("'{text}'"),
        NodeKind::Sequence(children) => {
            format!("seq({})", join(children.iter().map(|c| c.to_string()), ", "))
        }
        NodeKind::Alternation(children) => {
            let items = children.iter().map(|c| match c {
                Some(id) => id.to_string(),
                None => "ε".to_string(),
            });
            format!("alt({})", join(items, " | "))
        }
        NodeKind::Argument(name) => format!("<{name}>"),
        NodeKind::Preset { argument, value } => format!("<{argument}> = {value}"),
        NodeKind::Cluster(entries) => {
            let items = entries.iter().map(|e| {
                if e.takes_value {
                    format!("{}=<{}>", e.letter, e.argument)
                } else {
                    format!("{}={}", e.letter, e.argument)
                }
            });
            format!("cluster({})", join(items, " "))
        }
        NodeKind::AtMostOnce(child) => format!("once({child})"),
        NodeKind::BackReference(label) => format!("ref({label})"),
    }
}

fn join(items: impl Iterator<Item = String>, sep: &str) -> String {
    items.collect::<Vec<_>>().join(sep)
}
