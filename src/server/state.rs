//! Server state.

use crate::config::Config;
use crate::document::Assembler;

/// Application state shared across handlers.
///
/// Read-only after startup, so handlers share it without locking.
pub struct AppState {
    pub config: Config,
    pub assembler: Assembler,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assembler = Assembler::from_config(&config);
        Self { config, assembler }
    }

    /// The base URL for links: the request's own, else the configured one.
    pub fn base_url(&self, requested: Option<&str>) -> Option<String> {
        requested
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.config.server.public_base_url.clone())
    }
}
