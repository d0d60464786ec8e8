use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed transport error: {0}")]
    Http(#[from] reqwest::Error),
}
