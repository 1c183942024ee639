//! Configuration parsing
//!
//! Handles parsing of topology configuration files and check toggles.
//!
//! ## Configuration Format
//!
//! ```yaml
//! chains:
//!   - id: osmosis-1
//!     name: osmosis
//!     numValidators: 1
//!     ports:
//!       rest: 1313
//!       rpc: 26653
//!
//! relayers:
//!   - name: osmos-gaia
//!     type: hermes
//!     replicas: 1
//!     chains: [osmosis-1, gaia-1]
//!     ports:
//!       rest: 3000
//!
//! checks:
//!   bank-balances:
//!     enabled: false
//! ```

mod expectations;
mod topology;

pub use expectations::Expectations;
pub use topology::{
    resolve_config_path, Balance, Chain, CheckConfig, Config, ConfigError, Feature, Ports, Relayer,
    CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH,
};
