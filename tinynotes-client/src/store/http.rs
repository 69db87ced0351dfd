use api_data::model::{NotePayload, NoteResponse};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tinynotes::data::Note;
use uuid::Uuid;

use crate::store::NoteStore;
use crate::store::errors::StoreError;

pub struct HttpNoteStore {
    base_url: String,
    client: Client,
}

impl HttpNoteStore {
    /// `base_url` is the API mount, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpNoteStore {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: Client::new(),
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: Uuid) -> String {
        format!("{}/notes/{id}", self.base_url)
    }
}

#[async_trait]
impl NoteStore for HttpNoteStore {
    async fn fetch_all(&self) -> Result<Vec<Note>, StoreError> {
        let response = check(
            self.client.get(self.notes_url()).send().await?
        )?;
        let notes: Vec<NoteResponse> = response.json().await?;
        Ok(notes.into_iter().map(Note::from).collect())
    }

    async fn fetch(&self, id: Uuid) -> Result<Note, StoreError> {
        let response = check(
            self.client.get(self.note_url(id)).send().await?
        )?;
        Ok(response.json::<NoteResponse>().await?.into())
    }

    async fn create(&self, payload: &NotePayload) -> Result<Note, StoreError> {
        let response = check(
            self.client.post(self.notes_url()).json(payload).send().await?
        )?;
        Ok(response.json::<NoteResponse>().await?.into())
    }

    async fn update(
        &self,
        id: Uuid,
        payload: &NotePayload,
    ) -> Result<Note, StoreError> {
        let response = check(
            self.client.put(self.note_url(id)).json(payload).send().await?
        )?;
        Ok(response.json::<NoteResponse>().await?.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        check(self.client.delete(self.note_url(id)).send().await?)?;
        Ok(())
    }
}

fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    match status {
        StatusCode::NOT_FOUND => Err(StoreError::NotFound),
        StatusCode::BAD_REQUEST
        | StatusCode::PAYLOAD_TOO_LARGE
        | StatusCode::UNPROCESSABLE_ENTITY
        => Err(StoreError::InvalidPayload(format!("status {status}"))),
        _ if status.is_client_error() || status.is_server_error()
        => Err(StoreError::Unexpected(status.as_u16())),
        _ => Ok(response),
    }
}
