use api_data::model::NoteResponse;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub id: Uuid,
    pub body: String,
    pub updated: OffsetDateTime,
}

impl From<Note> for NoteResponse {
    fn from(value: Note) -> Self {
        NoteResponse {
            id: value.id,
            body: value.body,
            updated: value.updated,
        }
    }
}

impl From<NoteResponse> for Note {
    fn from(value: NoteResponse) -> Self {
        Note {
            id: value.id,
            body: value.body,
            updated: value.updated,
        }
    }
}
