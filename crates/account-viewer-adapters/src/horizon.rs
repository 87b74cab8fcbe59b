//! Read-only Horizon REST client.

use std::time::Duration;

use serde_json::Value;

use account_viewer_core::{AccountData, PaymentRecord, PortError, PublicKey};

use crate::ViewerConfig;

#[derive(Debug, Clone)]
pub struct HorizonClient {
    base_url: String,
    payments_limit: u32,
    client: reqwest::blocking::Client,
}

impl HorizonClient {
    pub fn with_config(config: &ViewerConfig) -> Result<Self, PortError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .build()
            .map_err(|e| PortError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            base_url: config.horizon_url.trim_end_matches('/').to_owned(),
            payments_limit: config.payments_limit,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetch_account(&self, public_key: &PublicKey) -> Result<AccountData, PortError> {
        let url = format!("{}/accounts/{}", self.base_url, public_key);
        let body = self.get_json(&url).map_err(|e| match e {
            PortError::Http { status: 404, .. } => {
                PortError::NotFound(format!("account {public_key} does not exist"))
            }
            other => other,
        })?;
        serde_json::from_value(body)
            .map_err(|e| PortError::Decode(format!("account payload: {e}")))
    }

    pub fn fetch_payments(&self, public_key: &PublicKey) -> Result<Vec<PaymentRecord>, PortError> {
        let url = format!(
            "{}/accounts/{}/payments?order=desc&limit={}",
            self.base_url, public_key, self.payments_limit
        );
        let body = self.get_json(&url)?;
        let records = body
            .pointer("/_embedded/records")
            .cloned()
            .ok_or_else(|| PortError::Decode("payments payload missing _embedded.records".to_owned()))?;
        serde_json::from_value(records)
            .map_err(|e| PortError::Decode(format!("payment records: {e}")))
    }

    fn get_json(&self, url: &str) -> Result<Value, PortError> {
        tracing::debug!(url, "horizon request");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| PortError::Transport(format!("horizon request failed: {e}")))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| PortError::Transport(format!("horizon body read failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        serde_json::from_str(&text).map_err(|e| PortError::Decode(format!("horizon json: {e}")))
    }
}
