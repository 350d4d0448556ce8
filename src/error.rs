use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error when reading `{0}`")]
    Io(String, #[source] std::io::Error),

    #[error("`{0}` is not valid UTF-8")]
    NotUtf8(String),

    #[error("only one side can be read from stdin")]
    StdinTwice,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportParseError {
    #[error("line {line_number}: expected a `  `, `- ` or `+ ` prefix, found {line:?}")]
    UnknownPrefix { line_number: usize, line: String },
}
