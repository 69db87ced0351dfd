pub const DEFAULT_DATA_DIR: &str = "/var/tinynotes";

// TODO: validate to fit both in u64 and usize
pub const DEFAULT_MAX_NOTE_LEN: u64 = 128 * 1024;
