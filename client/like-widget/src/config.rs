//! Client configuration and mode selection.
//!
//! The build-time `STATIC_EXPORT` flag of the original deployment becomes an
//! explicit `Mode` value parsed once here and injected at composition time;
//! nothing downstream reads the environment again.

use std::path::PathBuf;

/// Which backing store the widget talks to. The two modes are mutually
/// exclusive for the lifetime of the composed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Talk to the likes-service HTTP surface
    Server,
    /// Keep counts in per-user local files, no network
    Local,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub mode: Mode,
    /// Base URL of likes-service (server mode)
    pub api_url: String,
    /// Override for the local counter directory (local mode)
    pub data_dir: Option<PathBuf>,
    /// Base URL of the external content source
    pub posts_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mode = match std::env::var("STATIC_EXPORT") {
            Ok(v) if v == "true" => Mode::Local,
            _ => Mode::Server,
        };

        ClientConfig {
            mode,
            api_url: std::env::var("LIKES_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            data_dir: std::env::var("LIKES_DATA_DIR").ok().map(PathBuf::from),
            posts_url: std::env::var("POSTS_URL")
                .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_export_flag_selects_local_mode() {
        // Env-var tests mutate process state; keep them in one test to avoid
        // interleaving.
        std::env::set_var("STATIC_EXPORT", "true");
        assert_eq!(ClientConfig::from_env().mode, Mode::Local);

        std::env::set_var("STATIC_EXPORT", "false");
        assert_eq!(ClientConfig::from_env().mode, Mode::Server);

        std::env::remove_var("STATIC_EXPORT");
        assert_eq!(ClientConfig::from_env().mode, Mode::Server);
    }
}
