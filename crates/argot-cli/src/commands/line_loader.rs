use argot_lib::{CommandLine, TokenizerFlags};

/// Where the line to parse comes from.
#[derive(Debug, Default)]
pub struct LineInput {
    /// Raw text, tokenized shell-style.
    pub line: Option<String>,
    /// Words given after `--`, one token each.
    pub words: Vec<String>,
    pub redirects: bool,
    pub comments: bool,
}

impl LineInput {
    pub fn flags(&self) -> TokenizerFlags {
        TokenizerFlags::new()
            .redirects(self.redirects)
            .comments(self.comments)
    }
}

/// Builds the command line; no input at all is the empty line.
pub fn load_line(input: &LineInput) -> CommandLine {
    if !input.words.is_empty() {
        return CommandLine::from_words(input.words.iter().cloned());
    }
    CommandLine::parse(input.line.as_deref().unwrap_or(""), input.flags())
}
