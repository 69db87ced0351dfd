pub mod errors;
mod internal;

pub use internal::{NoteStorage, NoteStorageImpl};
pub use internal::io_trait;
