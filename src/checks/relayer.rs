//! Relayer State Check
//!
//! Validates that every Hermes relayer in the topology reports a healthy
//! state over its REST API.
//!
//! ## What it checks
//!
//! 1. Each Hermes relayer's `/state` endpoint responds with HTTP 200
//! 2. The reported `status` field equals "success"
//!
//! Relayers of other types and relayers with no exposed REST port are skipped.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::traits::{Check, CheckContext, CheckError, CheckResult, TargetResult};

/// Hermes relayer health check
pub struct RelayerStateCheck;

#[async_trait]
impl Check for RelayerStateCheck {
    fn name(&self) -> &'static str {
        "relayer-state"
    }

    fn description(&self) -> &'static str {
        "Validate that Hermes relayers report a healthy state"
    }

    async fn run(&self, ctx: &CheckContext) -> Result<CheckResult, CheckError> {
        let start = Instant::now();

        if ctx.config.relayers.is_empty() {
            return Ok(CheckResult::new(self.name(), vec![], start.elapsed())
                .with_message("no relayers configured"));
        }

        info!(relayers = ctx.config.relayers.len(), "Starting relayer-state check");

        let mut target_results = Vec::new();

        for relayer in &ctx.config.relayers {
            if !relayer.is_hermes() {
                debug!(relayer = %relayer.name, relayer_type = %relayer.relayer_type, "Not a Hermes relayer, skipping");
                continue;
            }
            let Some(client) = ctx.hermes(relayer)? else {
                debug!(relayer = %relayer.name, "REST port not exposed, skipping");
                continue;
            };

            match client.state().await {
                Ok(state) => {
                    if state.status == "success" {
                        debug!(relayer = %relayer.name, "Relayer healthy");
                        target_results.push(
                            TargetResult::passed(&relayer.name).with_detail("status", &state.status),
                        );
                    } else {
                        warn!(relayer = %relayer.name, status = %state.status, "Relayer unhealthy");
                        target_results.push(
                            TargetResult::failed(
                                &relayer.name,
                                format!("expected status success, got {}", state.status),
                            )
                            .with_detail("status", &state.status),
                        );
                    }
                }
                Err(e) => {
                    warn!(relayer = %relayer.name, error = %e, "State request failed");
                    target_results.push(TargetResult::failed(
                        &relayer.name,
                        format!("state request failed: {e}"),
                    ));
                }
            }
        }

        let duration = start.elapsed();
        let message = format!(
            "{} of {} relayers checked against /state",
            target_results.len(),
            ctx.config.relayers.len()
        );

        Ok(CheckResult::new(self.name(), target_results, duration).with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_metadata() {
        let check = RelayerStateCheck;
        assert_eq!(check.name(), "relayer-state");
        assert!(!check.description().is_empty());
    }
}
