use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("catalog fetch failed: HTTP {status} from {url}")]
    Transport { status: u16, url: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("image check rejected: {0}")]
    RemoteValidation(String),

    #[error("display precondition not met: {0}")]
    Precondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
