//! Check implementations for topology testing
//!
//! This module provides the `Check` trait and implementations for the
//! assertions run against a deployed topology.
//!
//! ## Check Categories
//!
//! - **Liveness**: chain-status, relayer-state
//! - **State**: staking-params, bank-balances, eth-block, eth-balance
//!
//! ## Adding New Checks
//!
//! 1. Create a new file in `src/checks/` (e.g. `mycheck.rs`)
//! 2. Implement the `Check` trait
//! 3. Register in `registry.rs`
//! 4. Add to `mod.rs` exports

mod balances;
mod eth_balance;
mod eth_block;
pub mod registry;
mod relayer;
mod staking;
mod status;
mod traits;

pub use balances::BankBalancesCheck;
pub use eth_balance::EthBalanceCheck;
pub use eth_block::EthBlockCheck;
pub use registry::CHECKS;
pub use relayer::RelayerStateCheck;
pub use staking::StakingParamsCheck;
pub use status::ChainStatusCheck;
pub use traits::*;
