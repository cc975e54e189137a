//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{ActionProvider, GreedyActionProvider, SessionService};

use crate::{Client, ClientConfig};

/// Builder for constructing a Client with proper validation.
///
/// The session service is required; the provider defaults to the greedy
/// autopilot and the config to [`ClientConfig::default`].
#[derive(Default)]
pub struct ClientBuilder {
    service: Option<Arc<SessionService>>,
    provider: Option<Box<dyn ActionProvider>>,
    config: Option<ClientConfig>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session service (required).
    pub fn service(mut self, service: Arc<SessionService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the action provider driving every player (optional).
    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Override client configuration (optional).
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the session service is not set.
    pub fn build(self) -> Result<Client> {
        let service = self
            .service
            .context("SessionService is required. Use .service() to set it.")?;

        Ok(Client {
            service,
            provider: self
                .provider
                .unwrap_or_else(|| Box::new(GreedyActionProvider::new())),
            config: self.config.unwrap_or_default(),
        })
    }
}
