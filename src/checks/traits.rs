//! Check trait and supporting types
//!
//! The `Check` trait defines the interface for all topology checks.
//! Every probe is a single request/response/assert cycle with no retries and
//! no custom timeout; a failed target is recorded and the check moves on to
//! the next chain or relayer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::client::{ClientResult, CometClient, EthClient, HermesClient, LcdClient};
use crate::config::{Chain, Config, Expectations, Relayer};

/// Errors that can occur during check execution
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Client error: {0}")]
    Client(#[from] crate::client::ClientError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result of a single target's (chain, relayer, account) participation in a check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetResult {
    /// Target identifier (chain id, relayer name, chain/address pair)
    pub target: String,
    /// Whether this target passed
    pub passed: bool,
    /// Optional error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional details (check-specific)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, serde_json::Value>,
}

impl TargetResult {
    /// Create a passing result for a target
    pub fn passed(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            passed: true,
            error: None,
            details: HashMap::new(),
        }
    }

    /// Create a failing result for a target
    pub fn failed(target: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            passed: false,
            error: Some(error.into()),
            details: HashMap::new(),
        }
    }

    /// Add a detail to the result
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.details.insert(key.into(), v);
        }
        self
    }
}

/// Overall result of a check execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Name of the check
    pub check_name: String,
    /// Whether the check passed overall
    pub passed: bool,
    /// Individual target results
    pub target_results: Vec<TargetResult>,
    /// How long the check took
    pub duration: Duration,
    /// Summary message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    /// Create a new check result
    pub fn new(
        check_name: impl Into<String>,
        target_results: Vec<TargetResult>,
        duration: Duration,
    ) -> Self {
        let passed = target_results.iter().all(|r| r.passed);
        Self {
            check_name: check_name.into(),
            passed,
            target_results,
            duration,
            message: None,
        }
    }

    /// Add a summary message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Context provided to checks during execution
///
/// Holds the loaded topology, the expectations derived from the active config
/// file, and a shared HTTP client. Client accessors return `None` when the
/// corresponding port is `0` (service not exposed), which callers treat as
/// "skip this target".
#[derive(Clone)]
pub struct CheckContext {
    /// The loaded topology, read-only for the whole run
    pub config: Arc<Config>,
    /// Expected values derived from the active config file
    pub expectations: Expectations,
    /// Shared HTTP client
    http: reqwest::Client,
}

impl CheckContext {
    /// Create a new check context
    pub fn new(config: Arc<Config>, expectations: Expectations) -> Self {
        Self {
            config,
            expectations,
            http: reqwest::Client::new(),
        }
    }

    /// CometBFT RPC client for a chain, `None` if the RPC port is not exposed
    pub fn comet(&self, chain: &Chain) -> ClientResult<Option<CometClient>> {
        if chain.ports.rpc == 0 {
            return Ok(None);
        }
        Ok(Some(CometClient::new(self.http.clone(), chain.ports.rpc)?))
    }

    /// Cosmos LCD client for a chain, `None` if the REST port is not exposed
    pub fn lcd(&self, chain: &Chain) -> ClientResult<Option<LcdClient>> {
        if chain.ports.rest == 0 {
            return Ok(None);
        }
        Ok(Some(LcdClient::new(self.http.clone(), chain.ports.rest)?))
    }

    /// JSON-RPC client for an Ethereum-flavored chain, `None` if the port is
    /// not exposed. Ethereum chains expose JSON-RPC on the `rest` port.
    pub fn eth(&self, chain: &Chain) -> ClientResult<Option<EthClient>> {
        if chain.ports.rest == 0 {
            return Ok(None);
        }
        Ok(Some(EthClient::new(self.http.clone(), chain.ports.rest)?))
    }

    /// REST client for a relayer, `None` if the REST port is not exposed
    pub fn hermes(&self, relayer: &Relayer) -> ClientResult<Option<HermesClient>> {
        if relayer.ports.rest == 0 {
            return Ok(None);
        }
        Ok(Some(HermesClient::new(self.http.clone(), relayer.ports.rest)?))
    }
}

/// Trait for implementing topology checks
///
/// Each check verifies one aspect of the deployed topology. Checks are
/// registered in the `CHECKS` registry and can be invoked by name.
#[async_trait]
pub trait Check: Send + Sync {
    /// Unique name for this check (used in CLI and config)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Run the check against the topology
    async fn run(&self, ctx: &CheckContext) -> Result<CheckResult, CheckError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn context(yaml: &str) -> CheckContext {
        let config = Config::from_yaml(yaml).unwrap();
        let expectations = Expectations::for_config_file(Path::new("configs/two-chain.yaml"));
        CheckContext::new(Arc::new(config), expectations)
    }

    #[test]
    fn test_target_result_builders() {
        let passed = TargetResult::passed("gaia-1").with_detail("network", "gaia-1");
        assert!(passed.passed);
        assert!(passed.error.is_none());
        assert_eq!(passed.details["network"], "gaia-1");

        let failed = TargetResult::failed("gaia-1", "boom");
        assert!(!failed.passed);
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_check_result_aggregates_targets() {
        let result = CheckResult::new(
            "chain-status",
            vec![
                TargetResult::passed("gaia-1"),
                TargetResult::failed("osmosis-1", "mismatch"),
            ],
            Duration::from_millis(5),
        );
        assert!(!result.passed);

        let result = CheckResult::new(
            "chain-status",
            vec![TargetResult::passed("gaia-1")],
            Duration::from_millis(5),
        );
        assert!(result.passed);

        // A check with nothing to assert passes
        let result = CheckResult::new("chain-status", vec![], Duration::ZERO);
        assert!(result.passed);
    }

    #[test]
    fn test_context_skips_unexposed_ports() {
        let ctx = context(
            r"
chains:
  - id: gaia-1
    name: cosmoshub
    ports:
      rpc: 26657
relayers:
  - name: osmos-gaia
    type: hermes
",
        );

        let chain = &ctx.config.chains[0];
        assert!(ctx.comet(chain).unwrap().is_some());
        assert!(ctx.lcd(chain).unwrap().is_none());
        assert!(ctx.eth(chain).unwrap().is_none());

        let relayer = &ctx.config.relayers[0];
        assert!(ctx.hermes(relayer).unwrap().is_none());
    }
}
