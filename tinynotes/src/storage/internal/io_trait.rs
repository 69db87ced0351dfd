use std::ffi::OsString;
use std::path::Path;
use std::time::SystemTime;

use async_trait::async_trait;
use tokio::{fs, io};
use uuid::Uuid;

#[async_trait]
pub trait NoteStorageIo: Send + Sync {
    async fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    fn owner_ids(&self) -> (u32, u32);

    fn generate_id(&self) -> Uuid;
}

pub struct Metadata {
    pub is_dir: bool,
    pub len: u64,
    pub uid: u32,
    pub gid: u32,
    pub mode: u32,
    pub modified: SystemTime,
}

pub struct ProductionNoteStorageIo;

#[async_trait]
impl NoteStorageIo for ProductionNoteStorageIo {
    async fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        convert_metadata(fs::metadata(path).await?)
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut dir = fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            names.push(entry.file_name());
        }
        Ok(names)
    }

    #[cfg(unix)]
    fn owner_ids(&self) -> (u32, u32) {
        // SAFETY: plain libc calls without arguments
        unsafe { (libc::getuid(), libc::getgid()) }
    }

    #[cfg(not(unix))]
    fn owner_ids(&self) -> (u32, u32) {
        (0, 0)
    }

    fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(unix)]
fn convert_metadata(meta: std::fs::Metadata) -> io::Result<Metadata> {
    use std::os::unix::fs::MetadataExt;

    Ok(
        Metadata {
            is_dir: meta.is_dir(),
            len: meta.len(),
            uid: meta.uid(),
            gid: meta.gid(),
            mode: meta.mode(),
            modified: meta.modified()?,
        }
    )
}

#[cfg(not(unix))]
fn convert_metadata(meta: std::fs::Metadata) -> io::Result<Metadata> {
    Ok(
        Metadata {
            is_dir: meta.is_dir(),
            len: meta.len(),
            uid: 0,
            gid: 0,
            mode: 0o700,
            modified: meta.modified()?,
        }
    )
}
