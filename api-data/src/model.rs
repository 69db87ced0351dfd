use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A note as the store returns it. `id` and `updated` are assigned by the
/// server and never taken from a client.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
}

/// A note as a client sends it on create and update. Clients serialize their
/// whole local copy; the server honors `body` and ignores the rest.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NotePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub body: String,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
    )]
    pub updated: Option<OffsetDateTime>,
}

impl NotePayload {
    pub fn from_body(body: impl Into<String>) -> Self {
        NotePayload {
            id: None,
            body: body.into(),
            updated: None,
        }
    }
}
