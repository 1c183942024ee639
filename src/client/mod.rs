//! Service API clients
//!
//! Hand-written clients for the HTTP surfaces exposed by a running topology:
//! the CometBFT RPC and Cosmos LCD endpoints of chain nodes, the Hermes
//! relayer REST API and the Ethereum JSON-RPC endpoint.

mod comet;
mod eth;
mod hermes;
mod lcd;
mod types;

pub use comet::CometClient;
pub use eth::{parse_hex_quantity, EthClient};
pub use hermes::HermesClient;
pub use lcd::LcdClient;
pub use types::*;

use thiserror::Error;
use url::Url;

/// Errors that can occur when talking to a service endpoint
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unexpected status code {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Base URL for a locally reachable (port-forwarded) service port
pub(crate) fn service_url(port: u16) -> Result<Url, url::ParseError> {
    Url::parse(&format!("http://0.0.0.0:{port}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_url() {
        let url = service_url(26657).unwrap();
        assert_eq!(url.as_str(), "http://0.0.0.0:26657/");
    }
}
