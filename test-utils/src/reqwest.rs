use std::sync::LazyLock;

use reqwest::blocking::Client;

/// Shared client so tests reuse connections instead of building a client
/// per request.
pub static RQ: LazyLock<Client> = LazyLock::new(Client::new);
