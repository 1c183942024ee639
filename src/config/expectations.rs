//! Expected values derived from the active topology file
//!
//! Some assertions depend on which topology is deployed: genesis overrides in
//! `one-chain.yaml` shorten the unbonding period and fund custom accounts.
//! Rather than comparing file names inside individual checks, everything the
//! file identity implies is resolved here once and passed down.

use std::path::Path;

/// Expected values selected by the active topology file
#[derive(Debug, Clone, Copy)]
pub struct Expectations {
    /// Expected `unbonding_time` staking parameter
    pub unbonding_time: &'static str,
    /// Whether configured account balances should be asserted
    pub check_custom_balances: bool,
}

impl Expectations {
    /// Derive expectations from the topology file path
    pub fn for_config_file(path: &Path) -> Self {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        match file_name {
            // one-chain.yaml overrides staking genesis and funds test accounts
            "one-chain.yaml" => Self {
                unbonding_time: "5s",
                check_custom_balances: true,
            },
            // the custom-scripts variant applies its override in a post-start script
            "one-chain-custom-scripts.yaml" => Self {
                unbonding_time: "15s",
                check_custom_balances: false,
            },
            _ => Self {
                unbonding_time: "300s",
                check_custom_balances: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_one_chain_expectations() {
        let exp = Expectations::for_config_file(&PathBuf::from("configs/one-chain.yaml"));
        assert_eq!(exp.unbonding_time, "5s");
        assert!(exp.check_custom_balances);
    }

    #[test]
    fn test_custom_scripts_expectations() {
        let exp =
            Expectations::for_config_file(&PathBuf::from("configs/one-chain-custom-scripts.yaml"));
        assert_eq!(exp.unbonding_time, "15s");
        assert!(!exp.check_custom_balances);
    }

    #[test]
    fn test_default_expectations() {
        for path in ["configs/two-chain.yaml", "configs/multi-validator.yaml"] {
            let exp = Expectations::for_config_file(&PathBuf::from(path));
            assert_eq!(exp.unbonding_time, "300s");
            assert!(!exp.check_custom_balances);
        }
    }
}
