use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("oracle returned malformed verdict: {0}")]
    Malformed(String),
}
