use std::fmt::{Display, Formatter};
use std::str::FromStr;

use uuid::Uuid;

/// Route-parameter spelling of a note that is not persisted yet.
pub const NEW_NOTE_TOKEN: &str = "new";

/// Which note an editor is aimed at. A note that has never been persisted
/// has no identifier until the store assigns one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoteRef {
    New,
    Existing(Uuid),
}

impl NoteRef {
    pub fn is_new(&self) -> bool {
        matches!(self, NoteRef::New)
    }
}

impl FromStr for NoteRef {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NEW_NOTE_TOKEN {
            return Ok(NoteRef::New);
        }
        Ok(NoteRef::Existing(Uuid::from_str(s)?))
    }
}

impl Display for NoteRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteRef::New => f.write_str(NEW_NOTE_TOKEN),
            NoteRef::Existing(id) => Display::fmt(id, f),
        }
    }
}
