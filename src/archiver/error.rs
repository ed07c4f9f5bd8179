extern crate reqwest;
extern crate serde_json;

use std::{
    error::Error as StdError, fmt, io, path::PathBuf, result::Result as StdResult,
};

#[derive(Debug)]
pub enum Error {
    Network(reqwest::Error),
    Api(Option<String>),
    HistoryCorrupt { path: PathBuf, source: serde_json::Error },
    HistoryDuplicate { path: PathBuf, id: String },
    Io(io::Error),
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(err) => write!(f, "Error sending request: {}", err),
            Self::Api(Some(comment)) => write!(f, "API request failed: {}", comment),
            Self::Api(None) => write!(f, "API request failed"),
            Self::HistoryCorrupt { path, source } => {
                write!(f, "History file {} is corrupt: {}", path.display(), source)
            }
            Self::HistoryDuplicate { path, id } => write!(
                f,
                "History file {} contains duplicate entry {}",
                path.display(),
                id
            ),
            Self::Io(err) => write!(f, "Error accessing file: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::HistoryCorrupt { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            Self::Api(_) | Self::HistoryDuplicate { .. } => None,
        }
    }
}
