use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be issued or completed.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body was not valid JSON or did not match the
    /// expected envelope shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope decoded cleanly but its code signals failure; carries
    /// the server-supplied message.
    #[error("{message} (code {code})")]
    Api { code: i64, message: String },

    /// The request value does not flatten into signable parameters.
    /// A catalog request shape never triggers this.
    #[error("request cannot be signed: {0}")]
    SignatureInput(String),

    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("invalid config: {message}")]
    ConfigInvalid { message: String },

    #[error("scrape error: {0}")]
    Scrape(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the server answered with a non-success envelope code.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
