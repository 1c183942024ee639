//! Ethereum JSON-RPC client
//!
//! Client for the JSON-RPC surface of Ethereum-flavored chains. Requests are
//! POSTed to the endpoint root with a JSON-RPC 2.0 envelope.

use reqwest::{Client, StatusCode};
use url::Url;

use super::types::{JsonRpcRequest, JsonRpcResponse};
use super::{service_url, ClientError, ClientResult};

/// Client for the JSON-RPC endpoint of an Ethereum-flavored chain
#[derive(Debug, Clone)]
pub struct EthClient {
    /// Base URL of the JSON-RPC endpoint (e.g. http://0.0.0.0:8545)
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
}

impl EthClient {
    /// Create a client for the JSON-RPC port of a chain node
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

    /// Get the latest block number
    ///
    /// Method: eth_blockNumber
    pub async fn block_number(&self) -> ClientResult<u64> {
        let result = self.call(JsonRpcRequest::new("eth_blockNumber", vec![])).await?;
        parse_hex_quantity(&result)
    }

    /// Get the balance of an address at the latest block, as the raw hex
    /// quantity string returned by the node
    ///
    /// Method: eth_getBalance
    pub async fn balance(&self, address: &str) -> ClientResult<String> {
        self.call(JsonRpcRequest::new(
            "eth_getBalance",
            vec![address.into(), "latest".into()],
        ))
        .await
    }

    /// Send a JSON-RPC request and extract the hex-string result
    async fn call(&self, request: JsonRpcRequest) -> ClientResult<String> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(&request)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: self.base_url.to_string(),
            });
        }

        let envelope: JsonRpcResponse = response.json().await?;

        if let Some(error) = envelope.error {
            return Err(ClientError::UnexpectedResponse(format!(
                "JSON-RPC error {}: {}",
                error.code, error.message
            )));
        }

        envelope.result.ok_or_else(|| {
            ClientError::UnexpectedResponse("JSON-RPC response missing result".to_string())
        })
    }
}

/// Decode a `0x`-prefixed hex quantity
pub fn parse_hex_quantity(value: &str) -> ClientResult<u64> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    u64::from_str_radix(digits, 16).map_err(|e| {
        ClientError::UnexpectedResponse(format!("invalid hex quantity {value:?}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EthClient::new(Client::new(), 8545).unwrap();
        assert_eq!(client.base_url().as_str(), "http://0.0.0.0:8545/");
    }

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x10").unwrap(), 16);
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0xde0b6b3a7640000").unwrap(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_parse_hex_quantity_rejects_garbage() {
        assert!(parse_hex_quantity("0x").is_err());
        assert!(parse_hex_quantity("0xzz").is_err());
        assert!(parse_hex_quantity("").is_err());
    }
}
