//! Eth Balance Check
//!
//! Validates account balances on Ethereum chains via `eth_getBalance`.
//!
//! ## What it checks
//!
//! 1. The JSON-RPC endpoint answers `eth_getBalance` with HTTP 200 for each
//!    expected account
//! 2. The raw hex result equals the configured wei amount
//!
//! Genesis always funds one well-known account, so that pair is asserted even
//! when the topology lists no balances for the chain.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::traits::{Check, CheckContext, CheckError, CheckResult, TargetResult};
use crate::config::{Balance, Chain};

/// Account funded by the Ethereum genesis regardless of topology
const DEFAULT_FUNDED_ADDRESS: &str = "0x0000000000000000000000000000000000000001";

/// Genesis allocation for the default account: 1000 ETH in wei
const DEFAULT_FUNDED_AMOUNT: &str = "0x3635c9adc5dea00000";

/// Ethereum account balance check
pub struct EthBalanceCheck;

/// The balances to assert for a chain: the configured entries plus the
/// genesis-funded default account.
fn expected_balances(chain: &Chain) -> Vec<Balance> {
    let mut balances = chain.balances.clone();
    balances.push(Balance {
        address: DEFAULT_FUNDED_ADDRESS.to_string(),
        amount: DEFAULT_FUNDED_AMOUNT.to_string(),
    });
    balances
}

#[async_trait]
impl Check for EthBalanceCheck {
    fn name(&self) -> &'static str {
        "eth-balance"
    }

    fn description(&self) -> &'static str {
        "Validate account balances on Ethereum chains"
    }

    async fn run(&self, ctx: &CheckContext) -> Result<CheckResult, CheckError> {
        let start = Instant::now();

        info!("Starting eth-balance check");

        let mut target_results = Vec::new();

        for chain in &ctx.config.chains {
            if chain.name != "ethereum" {
                continue;
            }
            let Some(client) = ctx.eth(chain)? else {
                debug!(chain = %chain.id, "JSON-RPC port not exposed, skipping");
                continue;
            };

            for balance in expected_balances(chain) {
                let target = format!("{}/{}", chain.id, balance.address);

                match client.balance(&balance.address).await {
                    Ok(result) => {
                        if result == balance.amount {
                            debug!(chain = %chain.id, address = %balance.address, "Balance matches");
                            target_results
                                .push(TargetResult::passed(&target).with_detail("wei", &result));
                        } else {
                            warn!(
                                chain = %chain.id,
                                address = %balance.address,
                                expected = %balance.amount,
                                actual = %result,
                                "Balance mismatch"
                            );
                            target_results.push(
                                TargetResult::failed(
                                    &target,
                                    format!("expected balance {}, got {result}", balance.amount),
                                )
                                .with_detail("wei", &result),
                            );
                        }
                    }
                    Err(e) => {
                        warn!(chain = %chain.id, address = %balance.address, error = %e, "Balance request failed");
                        target_results.push(TargetResult::failed(
                            &target,
                            format!("balance request failed: {e}"),
                        ));
                    }
                }
            }
        }

        let duration = start.elapsed();
        let message = format!("{} Ethereum accounts checked", target_results.len());

        Ok(CheckResult::new(self.name(), target_results, duration).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ports;
    use std::collections::HashMap;

    fn eth_chain(balances: Vec<Balance>) -> Chain {
        Chain {
            id: "1337".to_string(),
            name: "ethereum".to_string(),
            num_validators: 1,
            cometmock: None,
            faucet: None,
            ports: Ports {
                rest: 8545,
                ..Ports::default()
            },
            genesis: HashMap::new(),
            balances,
        }
    }

    #[test]
    fn test_check_metadata() {
        let check = EthBalanceCheck;
        assert_eq!(check.name(), "eth-balance");
        assert!(!check.description().is_empty());
    }

    #[test]
    fn test_default_account_asserted_with_empty_balances() {
        let balances = expected_balances(&eth_chain(vec![]));
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].address, DEFAULT_FUNDED_ADDRESS);
        assert_eq!(balances[0].amount, DEFAULT_FUNDED_AMOUNT);
    }

    #[test]
    fn test_default_account_appended_to_configured_balances() {
        let configured = Balance {
            address: "0x00000000000000000000000000000000000000aa".to_string(),
            amount: "0xde0b6b3a7640000".to_string(),
        };
        let balances = expected_balances(&eth_chain(vec![configured.clone()]));
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].address, configured.address);
        assert_eq!(balances[1].address, DEFAULT_FUNDED_ADDRESS);
    }
}
