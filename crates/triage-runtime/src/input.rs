use crate::{Error, Result};
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

/// Where the dump text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
}

impl InputSource {
    /// Parse a command-line value; `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(PathBuf::from(arg))
        }
    }

    /// Read the whole dump into memory.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn read(&self) -> Result<String> {
        let bytes = match self {
            InputSource::Path(path) => std::fs::read(path).map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    Error::InputNotFound(path.display().to_string())
                } else {
                    Error::Io(err)
                }
            })?,
            InputSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf)?;
                buf
            }
        };

        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(source = %self, "input is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Path(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}
