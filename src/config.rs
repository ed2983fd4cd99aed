use std::env;

use anyhow::Result;

/// Default maximum request body size: 16 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Bearer token required on all evaluating endpoints (AUTH_TOKEN).
    /// Injected into the auth middleware through AppState — never read
    /// from the environment after startup.
    pub auth_token: String,
    /// Listen port (PORT env var, overridable from the CLI).
    pub port: u16,
    /// Request body size cap, enforced at the router layer
    /// (SAFEGATE_MAX_BODY_BYTES).
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let max_body_bytes = match env::var("SAFEGATE_MAX_BODY_BYTES") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("SAFEGATE_MAX_BODY_BYTES is not a valid byte count: {raw}")
            })?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            auth_token: env::var("AUTH_TOKEN").unwrap_or_default(),
            port,
            max_body_bytes,
        })
    }

    /// Check that the auth token is configured.
    ///
    /// An empty token means every protected endpoint rejects with 401,
    /// which is safe but almost certainly a misconfiguration.
    pub fn has_auth_token(&self) -> bool {
        !self.auth_token.is_empty()
    }
}
