use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note does not exist in the store")]
    NotFound,

    #[error("cannot reach the note store: {0}")]
    Network(#[source] reqwest::Error),

    #[error("the store rejected the request: {0}")]
    InvalidPayload(String),

    #[error("unexpected response status {0}")]
    Unexpected(u16),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::InvalidPayload(err.to_string())
        } else {
            StoreError::Network(err)
        }
    }
}
