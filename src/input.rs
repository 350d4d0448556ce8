use std::fs;
use std::io::Read;

use tracing::info;

use crate::error::InputError;

pub const STDIN_SOURCE: &str = "-";

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub name: String,
    pub text: String,
}

impl Side {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Reads one side from a file path, or from stdin when `source` is `-`.
pub fn load_side(source: &str) -> Result<Side, InputError> {
    let bytes = if source == STDIN_SOURCE {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|err| InputError::Io(source.to_string(), err))?;
        buf
    } else {
        fs::read(source).map_err(|err| InputError::Io(source.to_string(), err))?
    };

    let text = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8(source.to_string()))?;
    info!(source, bytes = text.len(), "loaded input");

    Ok(Side::new(source, text))
}

/// Loads both sides, refusing to read stdin twice.
pub fn load_pair(left: &str, right: &str) -> Result<(Side, Side), InputError> {
    if left == STDIN_SOURCE && right == STDIN_SOURCE {
        return Err(InputError::StdinTwice);
    }
    Ok((load_side(left)?, load_side(right)?))
}
