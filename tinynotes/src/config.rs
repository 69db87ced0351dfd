use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::lib_constants::{DEFAULT_DATA_DIR, DEFAULT_MAX_NOTE_LEN};

pub mod figment;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub max_note_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: PathBuf::from(DEFAULT_DATA_DIR),
            max_note_size: DEFAULT_MAX_NOTE_LEN,
        }
    }
}
