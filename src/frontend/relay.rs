use gloo_net::http::Request;

use crate::config::RelayConfig;
use crate::contact::{EmailRelay, RelayError, RelayRequest};

/// Posts contact messages to the EmailJS REST endpoint.
pub struct EmailJsRelay {
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status, body })
    }
}
