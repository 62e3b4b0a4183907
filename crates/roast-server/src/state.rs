//! Shared application state

use std::sync::Arc;

use roast_core::error::{Error, Result};
use roast_core::{GeminiClient, RoastConfig, SoundCatalog};

/// Shared application state. Everything here is read-only after startup, so
/// clones are cheap and no synchronization is needed across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RoastConfig>,
    pub catalog: Arc<SoundCatalog>,
    /// Present only when the API credential is configured.
    client: Option<GeminiClient>,
}

impl AppState {
    pub fn new(config: RoastConfig, catalog: SoundCatalog) -> Self {
        let client = config.api_key.as_ref().map(|key| {
            GeminiClient::new(config.api_base.clone(), config.model.clone(), key.clone())
        });

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            client,
        }
    }

    /// The configured Gemini client, or the fail-fast configuration error.
    /// Checked before any request body is interpreted so a missing credential
    /// never reaches the network.
    pub fn client(&self) -> Result<&GeminiClient> {
        self.client.as_ref().ok_or(Error::MissingApiKey)
    }
}
