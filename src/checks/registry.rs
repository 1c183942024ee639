//! Check registry
//!
//! Central registry of all available checks. New checks should be registered
//! here.
//!
//! ## Check Ordering
//!
//! Checks are registered in a specific order:
//! 1. **Liveness checks** run first (chain-status, relayer-state) to verify
//!    the topology is reachable before state assertions.
//! 2. **State checks** run after (staking-params, bank-balances, eth-block,
//!    eth-balance).

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

use super::traits::Check;
use super::{
    BankBalancesCheck, ChainStatusCheck, EthBalanceCheck, EthBlockCheck, RelayerStateCheck,
    StakingParamsCheck,
};

/// Global registry of all available checks
///
/// Uses IndexMap to preserve insertion order, ensuring checks run in a
/// deterministic sequence (liveness before state).
pub static CHECKS: Lazy<IndexMap<&'static str, Arc<dyn Check>>> = Lazy::new(|| {
    let mut m: IndexMap<&'static str, Arc<dyn Check>> = IndexMap::new();

    // Liveness checks - run FIRST to verify the topology is reachable
    m.insert("chain-status", Arc::new(ChainStatusCheck));
    m.insert("relayer-state", Arc::new(RelayerStateCheck));

    // State checks - run AFTER liveness is verified
    m.insert("staking-params", Arc::new(StakingParamsCheck));
    m.insert("bank-balances", Arc::new(BankBalancesCheck));
    m.insert("eth-block", Arc::new(EthBlockCheck));
    m.insert("eth-balance", Arc::new(EthBalanceCheck));

    m
});

/// Get a check by name
pub fn get_check(name: &str) -> Option<Arc<dyn Check>> {
    CHECKS.get(name).cloned()
}

/// List all available check names
pub fn list_checks() -> Vec<&'static str> {
    let mut names: Vec<_> = CHECKS.keys().copied().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness_checks_registered() {
        assert!(CHECKS.contains_key("chain-status"));
        assert!(CHECKS.contains_key("relayer-state"));
    }

    #[test]
    fn test_state_checks_registered() {
        assert!(CHECKS.contains_key("staking-params"));
        assert!(CHECKS.contains_key("bank-balances"));
        assert!(CHECKS.contains_key("eth-block"));
        assert!(CHECKS.contains_key("eth-balance"));
    }

    #[test]
    fn test_get_check() {
        let check = get_check("chain-status");
        assert!(check.is_some());
        assert_eq!(check.unwrap().name(), "chain-status");

        assert!(get_check("unknown").is_none());
    }

    #[test]
    fn test_registry_names_match_check_names() {
        for (name, check) in CHECKS.iter() {
            assert_eq!(*name, check.name());
        }
    }

    #[test]
    fn test_list_checks() {
        let names = list_checks();
        assert_eq!(names.len(), CHECKS.len());
        assert!(names.contains(&"chain-status"));
        assert!(names.contains(&"eth-balance"));
    }
}
