//! On-disk registry of deployed contracts, one JSON record per contract and
//! network: `{deployments_dir}/{network}/{ContractName}.json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use near_workspaces::AccountId;
use tracing::debug;

use crate::{Config, Error};

pub const NFT_MARKETPLACE: &str = "NftMarketplace";
pub const BASIC_NFT: &str = "BasicNft";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub account_id: String,
    pub network: String,
    #[serde(default)]
    pub abi: Option<Value>,
}

impl DeploymentRecord {
    pub fn account_id(&self) -> Result<AccountId, Error> {
        self.account_id
            .parse()
            .map_err(|e| Error::Json(format!("{}: invalid account id: {e}", self.contract_name)))
    }
}

#[derive(Debug, Clone)]
pub struct DeploymentRegistry {
    root: PathBuf,
    network: String,
}

impl DeploymentRegistry {
    pub fn new(root: impl Into<PathBuf>, network: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            network: network.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.deployments_dir, config.network.to_string())
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    fn path(&self, contract_name: &str) -> PathBuf {
        self.root
            .join(&self.network)
            .join(format!("{contract_name}.json"))
    }

    /// Returns `Ok(None)` when nothing is recorded for `contract_name`.
    pub fn find(&self, contract_name: &str) -> Result<Option<DeploymentRecord>, Error> {
        let path = self.path(contract_name);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub fn get(&self, contract_name: &str) -> Result<DeploymentRecord, Error> {
        self.find(contract_name)?.ok_or_else(|| Error::NotDeployed {
            contract_name: contract_name.to_string(),
            network: self.network.clone(),
        })
    }

    pub fn account_id(&self, contract_name: &str) -> Result<AccountId, Error> {
        self.get(contract_name)?.account_id()
    }

    pub fn save(&self, record: &DeploymentRecord) -> Result<(), Error> {
        let path = self.path(&record.contract_name);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_json::to_string_pretty(record)?)?;
        debug!(path = %path.display(), "deployment recorded");
        Ok(())
    }
}
