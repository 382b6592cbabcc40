//! Builder-pattern printer for rendering a diagnostic.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::Diagnostic;

/// Builder for rendering a diagnostic against its source line.
pub struct DiagnosticPrinter<'d, 's> {
    diagnostic: &'d Diagnostic,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticPrinter<'d, 's> {
    pub fn new(diagnostic: &'d Diagnostic, source: &'s str) -> Self {
        Self {
            diagnostic,
            source,
            path: None,
            colored: false,
        }
    }

    /// Origin shown in the `-->` line, e.g. a script name.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(self.diagnostic.range(), self.source.len());
        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(self.diagnostic.label()),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![
            Level::ERROR
                .primary_title(self.diagnostic.message())
                .element(snippet),
        ];
        write!(w, "{}", renderer.render(&report))
    }
}

fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}
