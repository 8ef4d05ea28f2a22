use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse connection URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
