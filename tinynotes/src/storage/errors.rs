use thiserror::Error;

use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("data directory does not exist")]
    DoesNotExist,

    #[error("note does not exist")]
    NotFound,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("insufficient permissions to access storage")]
    Permission,

    #[error("note too large")]
    TooBig,
}
