//! Chain Status Check
//!
//! Validates that every chain node reports the network identifier its
//! topology entry declares.
//!
//! ## What it checks
//!
//! 1. Each chain's CometBFT RPC `/status` endpoint responds with HTTP 200
//! 2. The reported `result.node_info.network` equals the configured chain id
//!
//! Chains without a CometBFT surface (Ethereum-flavored, neutron) and chains
//! with no exposed RPC port are skipped individually; the remaining chains
//! are still checked.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::traits::{Check, CheckContext, CheckError, CheckResult, TargetResult};

/// Chain id validation check
pub struct ChainStatusCheck;

#[async_trait]
impl Check for ChainStatusCheck {
    fn name(&self) -> &'static str {
        "chain-status"
    }

    fn description(&self) -> &'static str {
        "Validate reported network ids against the topology"
    }

    async fn run(&self, ctx: &CheckContext) -> Result<CheckResult, CheckError> {
        let start = Instant::now();

        info!(chains = ctx.config.chains.len(), "Starting chain-status check");

        let mut target_results = Vec::new();

        for chain in &ctx.config.chains {
            if !chain.supports_comet() {
                debug!(chain = %chain.id, "No CometBFT RPC surface, skipping");
                continue;
            }
            let Some(client) = ctx.comet(chain)? else {
                debug!(chain = %chain.id, "RPC port not exposed, skipping");
                continue;
            };

            match client.status().await {
                Ok(status) => {
                    let network = status.result.node_info.network;
                    if network == chain.id {
                        debug!(chain = %chain.id, network = %network, "Network id matches");
                        target_results
                            .push(TargetResult::passed(&chain.id).with_detail("network", &network));
                    } else {
                        warn!(
                            chain = %chain.id,
                            network = %network,
                            "Node reports a different network id"
                        );
                        target_results.push(
                            TargetResult::failed(
                                &chain.id,
                                format!("expected network {}, node reports {}", chain.id, network),
                            )
                            .with_detail("network", &network),
                        );
                    }
                }
                Err(e) => {
                    warn!(chain = %chain.id, error = %e, "Status request failed");
                    target_results.push(TargetResult::failed(
                        &chain.id,
                        format!("status request failed: {e}"),
                    ));
                }
            }
        }

        let duration = start.elapsed();
        let checked = target_results.len();
        let message = format!(
            "{checked} of {} chains checked against /status",
            ctx.config.chains.len()
        );

        Ok(CheckResult::new(self.name(), target_results, duration).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_metadata() {
        let check = ChainStatusCheck;
        assert_eq!(check.name(), "chain-status");
        assert!(!check.description().is_empty());
    }
}
