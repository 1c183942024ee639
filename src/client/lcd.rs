//! Cosmos LCD (REST) client
//!
//! Client for the Cosmos SDK REST surface of a chain node: staking module
//! parameters and bank balances.

use reqwest::{Client, StatusCode};
use url::Url;

use super::types::{BalancesResponse, StakingParamsResponse};
use super::{service_url, ClientError, ClientResult};

/// Client for the Cosmos REST endpoint of a single chain node
#[derive(Debug, Clone)]
pub struct LcdClient {
    /// Base URL of the REST endpoint (e.g. http://0.0.0.0:1317)
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl LcdClient {
    /// Create a client for the REST port of a chain node
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

    /// Get the staking module parameters
    ///
    /// Endpoint: GET /cosmos/staking/v1beta1/params
    pub async fn staking_params(&self) -> ClientResult<StakingParamsResponse> {
        let url = self.base_url.join("cosmos/staking/v1beta1/params")?;
        let response = self.client.get(url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Get all balances of an address
    ///
    /// Endpoint: GET /cosmos/bank/v1beta1/balances/{address}
    pub async fn balances(&self, address: &str) -> ClientResult<BalancesResponse> {
        let url = self
            .base_url
            .join(&format!("cosmos/bank/v1beta1/balances/{address}"))?;
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
        let client = LcdClient::new(Client::new(), 1317).unwrap();
        assert_eq!(client.base_url().as_str(), "http://0.0.0.0:1317/");
    }

    #[test]
    fn test_balances_url() {
        let client = LcdClient::new(Client::new(), 1317).unwrap();
        let url = client
            .base_url()
            .join("cosmos/bank/v1beta1/balances/cosmos1abc")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://0.0.0.0:1317/cosmos/bank/v1beta1/balances/cosmos1abc"
        );
    }
}
