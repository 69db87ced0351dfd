use api_data::model::NotePayload;
use async_trait::async_trait;
use tinynotes::data::Note;
use uuid::Uuid;

use crate::store::errors::StoreError;

pub mod errors;
pub mod http;

/// The server-side note collection. One request per call; every outcome is
/// surfaced to the caller, nothing is fire-and-forget.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Note>, StoreError>;

    async fn fetch(&self, id: Uuid) -> Result<Note, StoreError>;

    async fn create(&self, payload: &NotePayload) -> Result<Note, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        payload: &NotePayload,
    ) -> Result<Note, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
