pub const DEFAULT_CONFIG_FILE: &str = "/etc/tinynotes/tinynotes.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "TINYNOTES_";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/api";
