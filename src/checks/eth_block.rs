//! Eth Block Check
//!
//! Validates that every Ethereum-flavored chain is producing blocks.
//!
//! ## What it checks
//!
//! 1. The JSON-RPC endpoint answers `eth_blockNumber` with HTTP 200
//! 2. The hex-decoded block height is greater than zero

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::traits::{Check, CheckContext, CheckError, CheckResult, TargetResult};

/// Ethereum block production check
pub struct EthBlockCheck;

/// A height of zero means the chain has not produced a block yet
fn evaluate_height(height: u64) -> Result<u64, String> {
    if height > 0 {
        Ok(height)
    } else {
        Err("block number should be greater than 0".to_string())
    }
}

#[async_trait]
impl Check for EthBlockCheck {
    fn name(&self) -> &'static str {
        "eth-block"
    }

    fn description(&self) -> &'static str {
        "Validate that Ethereum chains are producing blocks"
    }

    async fn run(&self, ctx: &CheckContext) -> Result<CheckResult, CheckError> {
        let start = Instant::now();

        info!("Starting eth-block check");

        let mut target_results = Vec::new();

        for chain in &ctx.config.chains {
            if !chain.is_ethereum() {
                continue;
            }
            let Some(client) = ctx.eth(chain)? else {
                debug!(chain = %chain.id, "JSON-RPC port not exposed, skipping");
                continue;
            };

            debug!(chain = %chain.name, url = %client.base_url(), "Checking latest block number");

            match client.block_number().await {
                Ok(height) => match evaluate_height(height) {
                    Ok(height) => {
                        info!(chain = %chain.id, height = height, "Latest block number");
                        target_results
                            .push(TargetResult::passed(&chain.id).with_detail("height", height));
                    }
                    Err(reason) => {
                        warn!(chain = %chain.id, height = height, "Chain is not producing blocks");
                        target_results.push(
                            TargetResult::failed(&chain.id, reason).with_detail("height", height),
                        );
                    }
                },
                Err(e) => {
                    warn!(chain = %chain.id, error = %e, "Block number request failed");
                    target_results.push(TargetResult::failed(
                        &chain.id,
                        format!("block number request failed: {e}"),
                    ));
                }
            }
        }

        let duration = start.elapsed();
        let message = format!("{} Ethereum chains checked", target_results.len());

        Ok(CheckResult::new(self.name(), target_results, duration).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::parse_hex_quantity;

    #[test]
    fn test_check_metadata() {
        let check = EthBlockCheck;
        assert_eq!(check.name(), "eth-block");
        assert!(!check.description().is_empty());
    }

    #[test]
    fn test_nonzero_height_passes() {
        let height = parse_hex_quantity("0x10").unwrap();
        assert_eq!(evaluate_height(height).unwrap(), 16);
    }

    #[test]
    fn test_zero_height_fails() {
        let height = parse_hex_quantity("0x0").unwrap();
        assert!(evaluate_height(height).is_err());
    }
}
