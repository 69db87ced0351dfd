pub const API_PREFIX: &str = "/api";
pub const WEB_PREFIX: &str = "/";
