use clap::Parser;
use tinynotes::bin_constants::DEFAULT_SERVER_URL;

use crate::note_ref::NoteRef;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    /// Base URL of the notes API.
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Note to open straight in the editor: an identifier, or "new".
    #[arg(value_name = "NOTE")]
    pub note: Option<NoteRef>,
}
