//! Service API types
//!
//! Response shapes for the endpoints exercised by the checks. Only the fields
//! the checks assert on are typed; everything else is ignored on decode.

use serde::{Deserialize, Serialize};

/// CometBFT node status envelope (protobuf-JSON)
///
/// Endpoint: GET /status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStatus {
    pub result: StatusResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResult {
    pub node_info: NodeInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Network (chain) identifier the node reports
    pub network: String,
    #[serde(default)]
    pub moniker: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Cosmos staking module parameters
///
/// Endpoint: GET /cosmos/staking/v1beta1/params
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingParamsResponse {
    pub params: StakingParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingParams {
    /// Unbonding period as a protobuf duration string (e.g. "300s")
    pub unbonding_time: String,
    #[serde(default)]
    pub max_validators: Option<u64>,
    #[serde(default)]
    pub bond_denom: Option<String>,
}

/// Cosmos bank balances for a single address
///
/// Endpoint: GET /cosmos/bank/v1beta1/balances/{address}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancesResponse {
    #[serde(default)]
    pub balances: Vec<Coin>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    /// Render as the `<amount><denom>` string used in topology balance entries
    pub fn to_coins_string(&self) -> String {
        format!("{}{}", self.amount, self.denom)
    }
}

/// Hermes relayer state envelope
///
/// Endpoint: GET /state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayerState {
    /// "success" when the relayer is healthy
    pub status: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Vec<serde_json::Value>,
    pub id: u32,
}

impl JsonRpcRequest {
    pub fn new(method: &'static str, params: Vec<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        }
    }
}

/// JSON-RPC 2.0 response envelope for hex-quantity results
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}
