//! CometBFT RPC client
//!
//! Minimal client for the CometBFT (Tendermint) RPC surface of a chain node.

use reqwest::{Client, StatusCode};
use url::Url;

use super::types::NodeStatus;
use super::{service_url, ClientError, ClientResult};

/// Client for the CometBFT RPC endpoint of a single chain node
#[derive(Debug, Clone)]
pub struct CometClient {
    /// Base URL of the RPC endpoint (e.g. http://0.0.0.0:26657)
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl CometClient {
    /// Create a client for the RPC port of a chain node
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

    /// Get the node status
    ///
    /// Endpoint: GET /status
    /// Returns the protobuf-JSON status envelope; the reported network field
    /// identifies the chain the node is serving.
    pub async fn status(&self) -> ClientResult<NodeStatus> {
        let url = self.base_url.join("status")?;
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
        let client = CometClient::new(Client::new(), 26657).unwrap();
        assert_eq!(client.base_url().as_str(), "http://0.0.0.0:26657/");
    }

    #[test]
    fn test_status_url() {
        let client = CometClient::new(Client::new(), 26657).unwrap();
        let url = client.base_url().join("status").unwrap();
        assert_eq!(url.as_str(), "http://0.0.0.0:26657/status");
    }
}
