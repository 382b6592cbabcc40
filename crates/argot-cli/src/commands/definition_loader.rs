use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use argot_lib::CommandSyntax;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("definition is required: use a positional file argument or -d/--definition")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("definition cannot be empty")]
    Empty,

    #[error(transparent)]
    Invalid(#[from] argot_lib::Error),
}

/// Reads the definition text from `-d`, stdin (`-`) or a file.
pub fn load_definition_source(
    definition_path: Option<&Path>,
    definition_text: Option<&str>,
) -> Result<String, LoadError> {
    let source = match (definition_text, definition_path) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(LoadError::Stdin)?;
            buf
        }
        (None, Some(path)) => fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.to_path_buf(),
            source,
        })?,
        (None, None) => return Err(LoadError::Missing),
    };

    if source.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(source)
}

/// Reads and compiles a definition.
pub fn load_syntax(
    definition_path: Option<&Path>,
    definition_text: Option<&str>,
) -> Result<CommandSyntax, LoadError> {
    let source = load_definition_source(definition_path, definition_text)?;
    Ok(CommandSyntax::from_json(&source)?)
}
