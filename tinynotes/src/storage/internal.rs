use std::path::{Path, PathBuf};
use std::str::FromStr;

use time::OffsetDateTime;
use tokio::io::{Error as IoError, ErrorKind};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::data::Note;
use crate::storage::errors::StorageError;
use crate::storage::internal::io_trait::{
    Metadata,
    NoteStorageIo,
    ProductionNoteStorageIo,
};

pub mod io_trait;

const REQUIRED_UNIX_PERMISSIONS: u32 = 0o700;

// temporary files carry a suffix a uuid can never have, so the lister
// skips them
const TMP_FILENAME_SUFFIX: &str = ".tmp";

pub type NoteStorage = NoteStorageImpl<ProductionNoteStorageIo>;

pub struct NoteStorageImpl<Io: NoteStorageIo> {
    io: Io,
    basedir: PathBuf,
    max_note_size: u64,
}

impl NoteStorage {
    pub async fn new(config: &AppConfig) -> Result<NoteStorage, StorageError> {
        Self::new_internal(
            &config.data_directory,
            config.max_note_size,
            ProductionNoteStorageIo,
        ).await
    }
}

impl<Io: NoteStorageIo> NoteStorageImpl<Io> {
    async fn new_internal(
        basedir: &Path,
        max_note_size: u64,
        io: Io,
    ) -> Result<NoteStorageImpl<Io>, StorageError> {
        let meta = io.metadata(basedir).await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::DoesNotExist,
                _ => StorageError::Io(e),
            })?;
        if !meta.is_dir {
            return Err(StorageError::DoesNotExist);
        }
        validate_storage_root_permissions(&io, &meta)?;
        Ok(
            NoteStorageImpl {
                io,
                basedir: basedir.to_owned(),
                max_note_size,
            }
        )
    }

    pub async fn read_note(&self, id: Uuid) -> Result<Note, StorageError> {
        let path = self.note_path(id);
        let meta = self.io.metadata(&path).await.map_err(map_missing_note)?;
        if meta.len > self.max_note_size {
            return Err(StorageError::TooBig);
        }
        let raw = self.io.read_file(&path).await.map_err(map_missing_note)?;
        Ok(
            Note {
                id,
                body: utf8_lossy_into_string(raw),
                updated: mtime(&meta),
            }
        )
    }

    /// All persisted notes, most recently written first.
    pub async fn list_notes(&self) -> Result<Vec<Note>, StorageError> {
        let mut notes = Vec::new();
        for name in self.io.list_dir(&self.basedir).await? {
            let Some(name) = name.to_str() else { continue };
            let Ok(id) = Uuid::from_str(name) else { continue };
            match self.read_note(id).await {
                Ok(note) => notes.push(note),
                // removed between listing and reading
                Err(StorageError::NotFound) => (),
                Err(e) => return Err(e),
            }
        }
        notes.sort_by(|a, b| b.updated.cmp(&a.updated));
        Ok(notes)
    }

    pub async fn create_note(&self, body: &str) -> Result<Note, StorageError> {
        self.check_size(body)?;
        let id = self.io.generate_id();
        self.write_note(id, body).await
    }

    pub async fn update_note(
        &self,
        id: Uuid,
        body: &str,
    ) -> Result<Note, StorageError> {
        self.check_size(body)?;
        self.io.metadata(&self.note_path(id)).await
            .map_err(map_missing_note)?;
        self.write_note(id, body).await
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<(), StorageError> {
        self.io.remove_file(&self.note_path(id)).await
            .map_err(map_missing_note)
    }

    async fn write_note(
        &self,
        id: Uuid,
        body: &str,
    ) -> Result<Note, StorageError> {
        let path = self.note_path(id);
        let tmp_path = self.basedir
            .join(format!("{id}{TMP_FILENAME_SUFFIX}"));
        self.io.write_file(&tmp_path, body.as_bytes()).await?;
        if let Err(e) = self.io.rename_file(&tmp_path, &path).await {
            if let Err(e) = self.io.remove_file(&tmp_path).await {
                log::error!(
                    "failed to clean up temporary file {}: {}",
                    tmp_path.display(),
                    e,
                );
            }
            return Err(e.into());
        }
        let meta = self.io.metadata(&path).await?;
        Ok(
            Note {
                id,
                body: body.to_owned(),
                updated: mtime(&meta),
            }
        )
    }

    fn check_size(&self, body: &str) -> Result<(), StorageError> {
        if body.len() as u64 > self.max_note_size {
            return Err(StorageError::TooBig);
        }
        Ok(())
    }

    fn note_path(&self, id: Uuid) -> PathBuf {
        self.basedir.join(id.to_string())
    }
}

fn map_missing_note(e: IoError) -> StorageError {
    match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Io(e),
    }
}

#[cfg(unix)]
fn validate_storage_root_permissions<Io: NoteStorageIo>(
    io: &Io,
    meta: &Metadata,
) -> Result<(), StorageError> {
    let (uid, _) = io.owner_ids();
    if meta.uid != uid
        || meta.mode & REQUIRED_UNIX_PERMISSIONS != REQUIRED_UNIX_PERMISSIONS {
        return Err(StorageError::Permission)
    }
    Ok(())
}

#[cfg(not(unix))]
fn validate_storage_root_permissions<Io: NoteStorageIo>(
    _io: &Io,
    _meta: &Metadata,
) -> Result<(), StorageError> {
    Ok(())
}

fn mtime(meta: &Metadata) -> OffsetDateTime {
    OffsetDateTime::from(meta.modified)
}

fn utf8_lossy_into_string(buf: Vec<u8>) -> String {
    String::from_utf8(buf)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
