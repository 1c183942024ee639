//! Hermes relayer REST client

use reqwest::{Client, StatusCode};
use url::Url;

use super::types::RelayerState;
use super::{service_url, ClientError, ClientResult};

/// Client for the REST API of a Hermes relayer
#[derive(Debug, Clone)]
pub struct HermesClient {
    /// Base URL of the relayer REST endpoint (e.g. http://0.0.0.0:3000)
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl HermesClient {
    /// Create a client for the REST port of a relayer
    pub fn new(client: Client, port: u16) -> ClientResult<Self> {
        Ok(Self {
            base_url: service_url(port)?,
            client,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the relayer state
    ///
    /// Endpoint: GET /state
    /// A healthy relayer reports status "success".
    pub async fn state(&self) -> ClientResult<RelayerState> {
        let url = self.base_url.join("state")?;
        let response = self.client.get(url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HermesClient::new(Client::new(), 3000).unwrap();
        assert_eq!(client.base_url().as_str(), "http://0.0.0.0:3000/");
    }
}
