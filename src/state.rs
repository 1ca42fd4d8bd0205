use std::sync::Arc;

use reqwest::Client;

use crate::{config::Config, providers::Provider};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<Provider>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, http_client: Client) -> Self {
        let provider = Provider::from_config(&config, http_client);
        Self {
            config: Arc::new(config),
            provider: Arc::new(provider),
        }
    }
}
