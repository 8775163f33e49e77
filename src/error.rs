use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Username must not be blank")]
    BlankUsername,

    #[error("User not found: {login} (HTTP {status})")]
    UserNotFound { login: String, status: u16 },

    #[error("Failed to fetch repositories: {detail}")]
    RepositoryFetch { detail: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Validation failures get a direct user prompt instead of the error view.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::BlankUsername)
    }
}
