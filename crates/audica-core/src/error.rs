use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not a song container: {0}")]
    NotAContainer(String),

    #[error("Song descriptor (song.desc) not found")]
    MissingDescriptor,

    #[error("Malformed entry '{entry}': {message}")]
    MalformedEntry { entry: String, message: String },

    #[error("Package incomplete: {0}")]
    DecodeIncomplete(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(entry: &str, message: impl std::fmt::Display) -> Self {
        Error::MalformedEntry {
            entry: entry.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Encode(format!("archive write failed: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
