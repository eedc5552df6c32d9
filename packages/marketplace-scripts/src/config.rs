//! Script configuration.
//!
//! Loaded from an optional `marketplace.{toml,json,yaml}` file and
//! `MARKETPLACE_*` environment variables (e.g. `MARKETPLACE_NETWORK=testnet`).

use serde::Deserialize;
use std::fmt;

use crate::Error;

/// Network the scripts talk to. Its name doubles as the chain id in the
/// front-end address file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Sandbox,
    Testnet,
    Mainnet,
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkKind::Sandbox => write!(f, "sandbox"),
            NetworkKind::Testnet => write!(f, "testnet"),
            NetworkKind::Mainnet => write!(f, "mainnet"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::network")]
    pub network: NetworkKind,

    /// RPC endpoint; network default when unset.
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// Home directory of a running local sandbox node.
    #[serde(default = "defaults::validator_home")]
    pub validator_home: String,

    /// Key file of the deploying account. Sandbox falls back to the validator key.
    #[serde(default)]
    pub credentials_path: Option<String>,

    #[serde(default = "defaults::deployments_dir")]
    pub deployments_dir: String,

    #[serde(default = "defaults::marketplace_wasm_path")]
    pub marketplace_wasm_path: String,

    #[serde(default = "defaults::basic_nft_wasm_path")]
    pub basic_nft_wasm_path: String,

    #[serde(default = "defaults::marketplace_abi_path")]
    pub marketplace_abi_path: String,

    #[serde(default = "defaults::front_end_abi_file")]
    pub front_end_abi_file: String,

    #[serde(default = "defaults::front_end_contracts_file")]
    pub front_end_contracts_file: String,

    #[serde(default = "defaults::update_front_end")]
    pub update_front_end: bool,

    /// Redeploy even when a deployment is already recorded.
    #[serde(default)]
    pub reset: bool,

    /// Listing price in yoctoNEAR.
    #[serde(default = "defaults::list_price")]
    pub list_price: String,

    #[serde(default = "defaults::contract_balance_near")]
    pub contract_balance_near: u64,

    #[serde(default = "defaults::gas_tgas")]
    pub gas_tgas: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: defaults::network(),
            rpc_url: None,
            validator_home: defaults::validator_home(),
            credentials_path: None,
            deployments_dir: defaults::deployments_dir(),
            marketplace_wasm_path: defaults::marketplace_wasm_path(),
            basic_nft_wasm_path: defaults::basic_nft_wasm_path(),
            marketplace_abi_path: defaults::marketplace_abi_path(),
            front_end_abi_file: defaults::front_end_abi_file(),
            front_end_contracts_file: defaults::front_end_contracts_file(),
            update_front_end: defaults::update_front_end(),
            reset: false,
            list_price: defaults::list_price(),
            contract_balance_near: defaults::contract_balance_near(),
            gas_tgas: defaults::gas_tgas(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("marketplace").required(false))
            .add_source(config::Environment::with_prefix("MARKETPLACE"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn list_price_yocto(&self) -> Result<u128, Error> {
        self.list_price
            .parse()
            .map_err(|_| Error::Config(format!("invalid list_price: {}", self.list_price)))
    }

    pub fn credentials_path(&self) -> Result<String, Error> {
        match (&self.credentials_path, self.network) {
            (Some(path), _) => Ok(path.clone()),
            (None, NetworkKind::Sandbox) => Ok(format!("{}/validator_key.json", self.validator_home)),
            (None, network) => Err(Error::Config(format!(
                "credentials_path is required for {network}"
            ))),
        }
    }
}

mod defaults {
    use super::NetworkKind;

    pub fn network() -> NetworkKind {
        NetworkKind::Sandbox
    }

    pub fn validator_home() -> String {
        std::env::var("NEAR_SANDBOX_HOME").unwrap_or_else(|_| "./.near-sandbox".into())
    }

    pub fn deployments_dir() -> String {
        "./deployments".into()
    }

    pub fn marketplace_wasm_path() -> String {
        "./target/near/nft_marketplace/nft_marketplace.wasm".into()
    }

    pub fn basic_nft_wasm_path() -> String {
        "./target/near/basic_nft/basic_nft.wasm".into()
    }

    pub fn marketplace_abi_path() -> String {
        "./target/near/nft_marketplace/nft_marketplace_abi.json".into()
    }

    pub fn front_end_abi_file() -> String {
        "../nft-marketplace/constants/abi.json".into()
    }

    pub fn front_end_contracts_file() -> String {
        "../nft-marketplace/constants/ContractAddress.json".into()
    }

    pub fn update_front_end() -> bool {
        flag_set(std::env::var("UPDATE_FRONTEND").ok().as_deref())
    }

    /// Any non-empty value counts as set, `0` and `false` included.
    pub fn flag_set(value: Option<&str>) -> bool {
        value.is_some_and(|v| !v.is_empty())
    }

    /// 0.01 NEAR
    pub fn list_price() -> String {
        "10000000000000000000000".into()
    }

    pub fn contract_balance_near() -> u64 {
        5
    }

    pub fn gas_tgas() -> u64 {
        100
    }
}
