use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000"); falls back to the leptos
    /// site address when unset
    pub listen: Option<String>,

    /// Unix socket path; takes precedence over the tcp listener
    pub socket: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - FOLIO_LISTEN
    /// - FOLIO_SOCKET
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("FOLIO_"))
            .extract()
    }
}
