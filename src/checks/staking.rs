//! Staking Params Check
//!
//! Validates the staking `unbonding_time` parameter of the first configured
//! chain against the value the active topology file implies (genesis
//! overrides in the one-chain topologies shorten it).
//!
//! ## What it checks
//!
//! 1. The first chain's LCD `/cosmos/staking/v1beta1/params` responds with 200
//! 2. `params.unbonding_time` equals the expected duration string

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::traits::{Check, CheckContext, CheckError, CheckResult, TargetResult};

/// Staking parameter validation check
pub struct StakingParamsCheck;

#[async_trait]
impl Check for StakingParamsCheck {
    fn name(&self) -> &'static str {
        "staking-params"
    }

    fn description(&self) -> &'static str {
        "Validate the staking unbonding time of the first chain"
    }

    async fn run(&self, ctx: &CheckContext) -> Result<CheckResult, CheckError> {
        let start = Instant::now();

        let Some(chain) = ctx.config.chains.first() else {
            return Ok(CheckResult::new(self.name(), vec![], start.elapsed())
                .with_message("no chains configured"));
        };

        if !chain.supports_comet() {
            debug!(chain = %chain.id, "No Cosmos staking surface, skipping");
            return Ok(CheckResult::new(self.name(), vec![], start.elapsed())
                .with_message(format!("{} has no staking surface, skipped", chain.id)));
        }

        let Some(client) = ctx.lcd(chain)? else {
            debug!(chain = %chain.id, "REST port not exposed, skipping");
            return Ok(CheckResult::new(self.name(), vec![], start.elapsed())
                .with_message(format!("{} exposes no REST port, skipped", chain.id)));
        };

        let expected = ctx.expectations.unbonding_time;
        info!(chain = %chain.id, expected = expected, "Starting staking-params check");

        let target_result = match client.staking_params().await {
            Ok(resp) => {
                let actual = resp.params.unbonding_time;
                if actual == expected {
                    TargetResult::passed(&chain.id).with_detail("unbonding_time", &actual)
                } else {
                    warn!(
                        chain = %chain.id,
                        expected = expected,
                        actual = %actual,
                        "Unbonding time mismatch"
                    );
                    TargetResult::failed(
                        &chain.id,
                        format!("expected unbonding_time {expected}, got {actual}"),
                    )
                    .with_detail("unbonding_time", &actual)
                }
            }
            Err(e) => {
                warn!(chain = %chain.id, error = %e, "Staking params request failed");
                TargetResult::failed(&chain.id, format!("staking params request failed: {e}"))
            }
        };

        let duration = start.elapsed();
        let message = format!("expected unbonding_time {expected}");

        Ok(CheckResult::new(self.name(), vec![target_result], duration).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_metadata() {
        let check = StakingParamsCheck;
        assert_eq!(check.name(), "staking-params");
        assert!(!check.description().is_empty());
    }
}
