//! Topology configuration types
//!
//! Defines the structure of the testnet topology file: the chains under test,
//! the relayers bridging them, and optional sidecar services.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the topology file to load
pub const CONFIG_ENV_VAR: &str = "ARMADA_CONFIG";

/// Topology file used when neither `--config` nor the environment names one
pub const DEFAULT_CONFIG_PATH: &str = "configs/two-chain.yaml";

/// Directory prefixes stripped from a raw config path before opening it.
///
/// Callers reference topology files relative to the repository root
/// (e.g. `armada/configs/two-chain.yaml`); the checker itself runs with the
/// crate root as its working directory, so these prefixes are dropped.
const STRIPPED_PREFIXES: &[&str] = &["armada/", "tests/e2e/"];

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Named service ports of a chain node, relayer or sidecar.
///
/// A value of `0` means the service is not exposed and callers must skip it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ports {
    #[serde(default)]
    pub rest: u16,
    #[serde(default)]
    pub rpc: u16,
    #[serde(default)]
    pub grpc: u16,
    #[serde(default)]
    pub exposer: u16,
    #[serde(default)]
    pub faucet: u16,
}

/// An expected account balance.
///
/// `amount` is a decimal-and-denom string for Cosmos chains (`"100uatom"`)
/// or a hex wei string for Ethereum chains (`"0x3635c9adc5dea00000"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub address: String,
    pub amount: String,
}

/// An optional sidecar service (faucet, explorer, registry, cometmock)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Ports>,
}

/// A single chain in the topology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    /// Network identifier (chain id reported by the node)
    pub id: String,
    /// Logical label, may differ from the id (e.g. "ethereum" vs "1337")
    pub name: String,
    #[serde(rename = "numValidators", default)]
    pub num_validators: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cometmock: Option<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet: Option<Feature>,
    #[serde(default)]
    pub ports: Ports,
    /// Genesis override map, passed through verbatim
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub genesis: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub balances: Vec<Balance>,
}

impl Chain {
    /// True for Ethereum-flavored chains (JSON-RPC instead of CometBFT/LCD)
    pub fn is_ethereum(&self) -> bool {
        self.name.starts_with("ethereum")
    }

    /// True if the chain exposes the standard CometBFT status and Cosmos
    /// staking surfaces. Neutron nodes in these topologies run behind
    /// cometmock and Ethereum nodes speak JSON-RPC, so both are excluded.
    pub fn supports_comet(&self) -> bool {
        self.name != "neutron" && !self.is_ethereum()
    }
}

/// A cross-chain relayer process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relayer {
    pub name: String,
    #[serde(rename = "type")]
    pub relayer_type: String,
    #[serde(default)]
    pub replicas: u32,
    /// Ids of the chains this relayer connects
    #[serde(default)]
    pub chains: Vec<String>,
    #[serde(default)]
    pub ports: Ports,
}

impl Relayer {
    /// True for Hermes relayers, the only type with a REST state endpoint
    pub fn is_hermes(&self) -> bool {
        self.relayer_type == "hermes"
    }
}

/// Configuration for a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Whether this check is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Top-level topology configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chains: Vec<Chain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relayers: Vec<Relayer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer: Option<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet: Option<Feature>,

    /// Check configurations (check name -> config); absent names are enabled
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub checks: HashMap<String, CheckConfig>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// True if the given chain id appears in the topology
    pub fn has_chain(&self, chain_id: &str) -> bool {
        self.chains.iter().any(|c| c.id == chain_id)
    }

    /// Look up a chain by id (first match wins)
    pub fn chain(&self, chain_id: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == chain_id)
    }

    /// Check if a specific check is enabled
    pub fn is_check_enabled(&self, name: &str) -> bool {
        self.checks.get(name).map(|c| c.enabled).unwrap_or(true)
    }

    /// Get list of enabled checks
    pub fn enabled_checks(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|(_, c)| c.enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Generate a default two-chain topology
    pub fn default_config() -> Self {
        Config {
            chains: vec![
                Chain {
                    id: "osmosis-1".to_string(),
                    name: "osmosis".to_string(),
                    num_validators: 1,
                    cometmock: None,
                    faucet: None,
                    ports: Ports {
                        rest: 1313,
                        rpc: 26653,
                        grpc: 0,
                        exposer: 8003,
                        faucet: 8007,
                    },
                    genesis: HashMap::new(),
                    balances: Vec::new(),
                },
                Chain {
                    id: "gaia-1".to_string(),
                    name: "cosmoshub".to_string(),
                    num_validators: 1,
                    cometmock: None,
                    faucet: None,
                    ports: Ports {
                        rest: 1317,
                        rpc: 26657,
                        grpc: 0,
                        exposer: 8004,
                        faucet: 8008,
                    },
                    genesis: HashMap::new(),
                    balances: Vec::new(),
                },
            ],
            relayers: vec![Relayer {
                name: "osmos-gaia".to_string(),
                relayer_type: "hermes".to_string(),
                replicas: 1,
                chains: vec!["osmosis-1".to_string(), "gaia-1".to_string()],
                ports: Ports {
                    rest: 3000,
                    ..Ports::default()
                },
            }],
            explorer: None,
            registry: None,
            faucet: None,
            checks: HashMap::new(),
        }
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Resolve the topology file path from an optional CLI flag and the
/// environment, falling back to [`DEFAULT_CONFIG_PATH`].
///
/// Resolved once at startup and passed down; nothing else reads the
/// environment. Known directory prefixes are stripped so the same config
/// reference works regardless of the caller's working directory.
pub fn resolve_config_path(flag: Option<&str>, env_value: Option<&str>) -> PathBuf {
    let raw = flag
        .filter(|s| !s.is_empty())
        .or_else(|| env_value.filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_CONFIG_PATH);

    let mut path = raw.to_string();
    for prefix in STRIPPED_PREFIXES {
        path = path.replace(prefix, "");
    }

    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r"
chains:
  - id: osmosis-1
    name: osmosis
    numValidators: 2
    ports:
      rest: 1313
      rpc: 26653
  - id: gaia-1
    name: cosmoshub
    numValidators: 1
    ports:
      rest: 1317
      rpc: 26657
    balances:
      - address: cosmos1xk2fhzsj5cnuzvu4gg7zs5cmjpzzrzmgv02f0y
        amount: 100uatom

relayers:
  - name: osmos-gaia
    type: hermes
    replicas: 1
    chains:
      - osmosis-1
      - gaia-1
    ports:
      rest: 3000

registry:
  enabled: true
  image: registry:latest
  ports:
    rest: 8081
";

    #[test]
    fn test_parse_config() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.chains.len(), 2);
        assert_eq!(config.chains[0].id, "osmosis-1");
        assert_eq!(config.chains[0].num_validators, 2);
        assert_eq!(config.chains[0].ports.rpc, 26653);
        assert_eq!(config.relayers.len(), 1);
        assert!(config.registry.as_ref().unwrap().enabled);
    }

    #[test]
    fn test_parse_balances() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        let gaia = config.chain("gaia-1").unwrap();
        assert_eq!(gaia.balances.len(), 1);
        assert_eq!(gaia.balances[0].amount, "100uatom");
    }

    #[test]
    fn test_unexposed_ports_default_to_zero() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.chains[0].ports.grpc, 0);
        assert_eq!(config.chains[0].ports.faucet, 0);
    }

    #[test]
    fn test_chain_lookup() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();

        for chain in &config.chains {
            assert!(config.has_chain(&chain.id));
            assert_eq!(config.chain(&chain.id).unwrap().id, chain.id);
        }

        assert!(!config.has_chain("nonexistent"));
        assert!(config.chain("nonexistent").is_none());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Config::from_yaml("chains: [{id: ").is_err());
        assert!(Config::from_yaml("not a mapping at all").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::from_file("configs/does-not-exist.yaml").is_err());
    }

    #[test]
    fn test_shipped_topologies_parse() {
        let config = Config::from_file("configs/two-chain.yaml").unwrap();
        assert_eq!(config.chains.len(), 2);
        assert!(config.relayers[0].is_hermes());

        let config = Config::from_file("configs/one-chain.yaml").unwrap();
        assert_eq!(config.chains.len(), 1);
        assert!(!config.chains[0].genesis.is_empty());
        assert_eq!(config.chains[0].balances[0].amount, "100uatom");
    }

    #[test]
    fn test_relayer_type() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        assert!(config.relayers[0].is_hermes());
        assert_eq!(config.relayers[0].chains, vec!["osmosis-1", "gaia-1"]);
    }

    #[test]
    fn test_chain_predicates() {
        let yaml = r"
chains:
  - id: gaia-1
    name: cosmoshub
  - id: neutron-1
    name: neutron
  - id: '1337'
    name: ethereum
  - id: '1338'
    name: ethereum-sepolia
";
        let config = Config::from_yaml(yaml).unwrap();
        assert!(config.chains[0].supports_comet());
        assert!(!config.chains[1].supports_comet());
        assert!(!config.chains[2].supports_comet());
        assert!(config.chains[2].is_ethereum());
        assert!(config.chains[3].is_ethereum());
        assert!(!config.chains[0].is_ethereum());
    }

    #[test]
    fn test_check_enabled() {
        let yaml = r"
chains:
  - id: gaia-1
    name: cosmoshub
checks:
  chain-status:
    enabled: true
  bank-balances:
    enabled: false
";
        let config = Config::from_yaml(yaml).unwrap();
        assert!(config.is_check_enabled("chain-status"));
        assert!(!config.is_check_enabled("bank-balances"));
        assert!(config.is_check_enabled("unknown")); // Default to enabled
    }

    #[test]
    fn test_default_config_roundtrip() {
        let config = Config::default_config();
        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.chains.len(), config.chains.len());
        assert_eq!(parsed.relayers[0].relayer_type, "hermes");
    }

    #[test]
    fn test_resolve_config_path_precedence() {
        let path = resolve_config_path(Some("configs/one-chain.yaml"), Some("ignored.yaml"));
        assert_eq!(path, PathBuf::from("configs/one-chain.yaml"));

        let path = resolve_config_path(None, Some("configs/one-chain.yaml"));
        assert_eq!(path, PathBuf::from("configs/one-chain.yaml"));

        let path = resolve_config_path(None, None);
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));

        // Empty values fall through
        let path = resolve_config_path(Some(""), Some(""));
        assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_resolve_config_path_strips_prefixes() {
        let path = resolve_config_path(Some("armada/configs/two-chain.yaml"), None);
        assert_eq!(path, PathBuf::from("configs/two-chain.yaml"));

        let path = resolve_config_path(Some("armada/tests/e2e/configs/one-chain.yaml"), None);
        assert_eq!(path, PathBuf::from("configs/one-chain.yaml"));
    }
}
