//! Bank Balances Check
//!
//! Validates the configured account balances through the Cosmos bank module.
//! Only the one-chain topology funds the accounts listed in its `balances`
//! entries, so the check is a no-op for other config files.
//!
//! ## What it checks
//!
//! 1. `/cosmos/bank/v1beta1/balances/{address}` responds with HTTP 200
//! 2. The response carries exactly one balance entry (a funded test account
//!    holds a single denomination; any other cardinality is a failure
//!    regardless of content)
//! 3. The `<amount><denom>` concatenation equals the configured amount

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::traits::{Check, CheckContext, CheckError, CheckResult, TargetResult};
use crate::client::BalancesResponse;

/// Configured account balance check
pub struct BankBalancesCheck;

/// Compare a balances response against the configured `<amount><denom>` string.
///
/// Returns the reported coins string, or a failure message.
fn evaluate_balance(expected_amount: &str, resp: &BalancesResponse) -> Result<String, String> {
    if resp.balances.len() != 1 {
        return Err(format!(
            "expected exactly one balance entry, got {}",
            resp.balances.len()
        ));
    }

    let coins = resp.balances[0].to_coins_string();
    if coins == expected_amount {
        Ok(coins)
    } else {
        Err(format!("expected balance {expected_amount}, got {coins}"))
    }
}

#[async_trait]
impl Check for BankBalancesCheck {
    fn name(&self) -> &'static str {
        "bank-balances"
    }

    fn description(&self) -> &'static str {
        "Validate configured account balances via the bank module"
    }

    async fn run(&self, ctx: &CheckContext) -> Result<CheckResult, CheckError> {
        let start = Instant::now();

        if !ctx.expectations.check_custom_balances {
            debug!("Active topology does not fund custom balances, skipping");
            return Ok(CheckResult::new(self.name(), vec![], start.elapsed())
                .with_message("custom balances not asserted for this topology"));
        }

        info!(chains = ctx.config.chains.len(), "Starting bank-balances check");

        let mut target_results = Vec::new();

        for chain in &ctx.config.chains {
            if chain.is_ethereum() {
                debug!(chain = %chain.id, "No bank module surface, skipping");
                continue;
            }
            let Some(client) = ctx.lcd(chain)? else {
                debug!(chain = %chain.id, "REST port not exposed, skipping");
                continue;
            };

            for balance in &chain.balances {
                let target = format!("{}/{}", chain.id, balance.address);

                match client.balances(&balance.address).await {
                    Ok(resp) => match evaluate_balance(&balance.amount, &resp) {
                        Ok(coins) => {
                            debug!(chain = %chain.id, address = %balance.address, coins = %coins, "Balance matches");
                            target_results
                                .push(TargetResult::passed(&target).with_detail("coins", &coins));
                        }
                        Err(reason) => {
                            warn!(chain = %chain.id, address = %balance.address, reason = %reason, "Balance mismatch");
                            target_results.push(TargetResult::failed(&target, reason));
                        }
                    },
                    Err(e) => {
                        warn!(chain = %chain.id, address = %balance.address, error = %e, "Balances request failed");
                        target_results.push(TargetResult::failed(
                            &target,
                            format!("balances request failed: {e}"),
                        ));
                    }
                }
            }
        }

        let duration = start.elapsed();
        let message = format!("{} configured balances checked", target_results.len());

        Ok(CheckResult::new(self.name(), target_results, duration).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Coin;

    fn response(coins: &[(&str, &str)]) -> BalancesResponse {
        BalancesResponse {
            balances: coins
                .iter()
                .map(|(amount, denom)| Coin {
                    amount: amount.to_string(),
                    denom: denom.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_check_metadata() {
        let check = BankBalancesCheck;
        assert_eq!(check.name(), "bank-balances");
        assert!(!check.description().is_empty());
    }

    #[test]
    fn test_matching_balance_passes() {
        let resp = response(&[("100", "uatom")]);
        assert_eq!(evaluate_balance("100uatom", &resp).unwrap(), "100uatom");
    }

    #[test]
    fn test_mismatched_amount_fails() {
        let resp = response(&[("99", "uatom")]);
        let err = evaluate_balance("100uatom", &resp).unwrap_err();
        assert!(err.contains("expected balance 100uatom"));
    }

    #[test]
    fn test_two_entries_fail_on_cardinality() {
        // Cardinality is asserted before content, so even a matching entry fails
        let resp = response(&[("100", "uatom"), ("5", "uosmo")]);
        let err = evaluate_balance("100uatom", &resp).unwrap_err();
        assert!(err.contains("exactly one balance entry"));
    }

    #[test]
    fn test_empty_response_fails() {
        let resp = response(&[]);
        let err = evaluate_balance("100uatom", &resp).unwrap_err();
        assert!(err.contains("got 0"));
    }
}
