//! Armada - Multi-Chain Testnet Checker
//!
//! A Rust-based checker for multi-chain testnets, designed to run health and
//! state checks against running chain nodes, relayers and sidecar services.
//!
//! ## Architecture
//!
//! Armada runs against an already-deployed topology:
//! - Loads a YAML topology description locating services by port
//! - Executes named checks against each configured chain and relayer
//! - Provides an HTTP status API for monitoring progress
//! - Exports Prometheus metrics for observability
//!
//! ## Modules
//!
//! - [`client`] - HTTP clients for chain node, relayer and Ethereum JSON-RPC APIs
//! - `checks` - Check implementations (chain-status, bank-balances, eth-block, etc.)
//! - `config` - Topology configuration parsing
//! - `api` - Status HTTP API

pub mod api;
pub mod checks;
pub mod client;
pub mod config;
