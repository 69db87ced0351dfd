use api_data::model::NotePayload;
use time::OffsetDateTime;
use tinynotes::data::Note;
use uuid::Uuid;

use crate::note_ref::NoteRef;
use crate::store::NoteStore;
use crate::store::errors::StoreError;

#[cfg(test)] mod tests;

/// The editor's locally owned copy of a note. Authoritative only until the
/// next load, and never shared with the list view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Draft {
    pub id: Option<Uuid>,
    pub body: String,
    pub updated: Option<OffsetDateTime>,
}

impl From<Note> for Draft {
    fn from(value: Note) -> Self {
        Draft {
            id: Some(value.id),
            body: value.body,
            updated: Some(value.updated),
        }
    }
}

impl Draft {
    fn to_payload(&self) -> NotePayload {
        NotePayload {
            id: self.id,
            body: self.body.clone(),
            updated: self.updated,
        }
    }
}

/// What leaving the editor did to the store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommitOutcome {
    Created(Note),
    Updated(Note),
    Deleted,
    /// Nothing worth persisting: a note that never existed and has no text.
    Skipped,
}

/// One visit to the editor: a fixed target plus the draft being typed into.
///
/// The target never changes for the session's lifetime. The draft starts as
/// the loaded note for an existing target and absent for a new one; it only
/// ever changes through [`EditorSession::set_body`]. No request leaves this
/// type between [`EditorSession::open`] and [`EditorSession::commit`] (or
/// [`EditorSession::delete`]).
pub struct EditorSession<'a, S: NoteStore + ?Sized> {
    store: &'a S,
    target: NoteRef,
    draft: Option<Draft>,
}

impl<'a, S: NoteStore + ?Sized> EditorSession<'a, S> {
    /// An existing note is loaded with a single read before anything is
    /// shown, and a failed load fails the whole open. A new note starts
    /// without a draft and issues no read.
    pub async fn open(
        store: &'a S,
        target: NoteRef,
    ) -> Result<EditorSession<'a, S>, StoreError> {
        let draft = match target {
            NoteRef::New => None,
            NoteRef::Existing(id) => Some(store.fetch(id).await?.into()),
        };
        Ok(EditorSession { store, target, draft })
    }

    pub fn target(&self) -> NoteRef {
        self.target
    }

    /// The text to display; empty until a draft exists.
    pub fn body(&self) -> &str {
        self.draft.as_ref().map(|d| d.body.as_str()).unwrap_or("")
    }

    /// Mirrors the edit surface into the draft. Only the body is replaced;
    /// the identifier and timestamp of a loaded copy stay untouched. The
    /// first edit of a brand-new note synthesizes the draft.
    pub fn set_body(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.draft {
            Some(ref mut draft) => draft.body = text,
            None => self.draft = Some(
                Draft {
                    id: None,
                    body: text,
                    updated: None,
                }
            ),
        }
    }

    /// Commits pending edits; meant to run when the user navigates away.
    ///
    /// At most one request is issued: an update for an existing note with
    /// text, a create for a new note with text, a delete for an existing
    /// note whose text was cleared. A new note without text commits nothing.
    pub async fn commit(&self) -> Result<CommitOutcome, StoreError> {
        match (self.target, &self.draft) {
            (NoteRef::Existing(id), Some(draft)) if !draft.body.is_empty() =>
                Ok(
                    CommitOutcome::Updated(
                        self.store.update(id, &draft.to_payload()).await?
                    )
                ),
            (NoteRef::New, Some(draft)) if !draft.body.is_empty() =>
                Ok(
                    CommitOutcome::Created(
                        self.store.create(&draft.to_payload()).await?
                    )
                ),
            (NoteRef::Existing(id), _) => {
                self.store.delete(id).await?;
                Ok(CommitOutcome::Deleted)
            },
            (NoteRef::New, _) => Ok(CommitOutcome::Skipped),
        }
    }

    /// The dedicated delete control: removes the note regardless of what the
    /// draft says. Deleting a note that was never created commits nothing.
    pub async fn delete(&self) -> Result<CommitOutcome, StoreError> {
        match self.target {
            NoteRef::Existing(id) => {
                self.store.delete(id).await?;
                Ok(CommitOutcome::Deleted)
            },
            NoteRef::New => Ok(CommitOutcome::Skipped),
        }
    }
}
