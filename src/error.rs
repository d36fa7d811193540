use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DexError {
    fn from(err: serde_json::Error) -> Self {
        DexError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DexError>;
