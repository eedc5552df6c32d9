//! Deploys the marketplace and the sample NFT as sub-accounts of the deployer.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use near_workspaces::types::{Gas, NearToken};
use near_workspaces::Account;
use tracing::{info, warn};

use crate::deployments::{DeploymentRecord, DeploymentRegistry, BASIC_NFT, NFT_MARKETPLACE};
use crate::{Config, Error};

/// One contract to deploy: registry name, sub-account prefix, artifacts, init args.
#[derive(Debug, Clone)]
pub struct ContractPlan {
    pub contract_name: &'static str,
    pub subaccount: &'static str,
    pub wasm_path: String,
    pub abi_path: Option<String>,
    pub init_args: Value,
}

impl ContractPlan {
    pub fn marketplace(config: &Config) -> Self {
        Self {
            contract_name: NFT_MARKETPLACE,
            subaccount: "market",
            wasm_path: config.marketplace_wasm_path.clone(),
            abi_path: Some(config.marketplace_abi_path.clone()),
            init_args: json!({}),
        }
    }

    pub fn basic_nft(config: &Config, owner: &Account) -> Self {
        Self {
            contract_name: BASIC_NFT,
            subaccount: "basic-nft",
            wasm_path: config.basic_nft_wasm_path.clone(),
            abi_path: None,
            init_args: json!({ "owner_id": owner.id() }),
        }
    }
}

pub async fn deploy_all(
    deployer: &Account,
    registry: &DeploymentRegistry,
    config: &Config,
) -> Result<Vec<DeploymentRecord>, Error> {
    let plans = [
        ContractPlan::marketplace(config),
        ContractPlan::basic_nft(config, deployer),
    ];
    let mut records = Vec::with_capacity(plans.len());
    for plan in &plans {
        records.push(deploy_contract(deployer, registry, config, plan).await?);
    }
    Ok(records)
}

pub async fn deploy_contract(
    deployer: &Account,
    registry: &DeploymentRegistry,
    config: &Config,
    plan: &ContractPlan,
) -> Result<DeploymentRecord, Error> {
    if !config.reset {
        if let Some(existing) = registry.find(plan.contract_name)? {
            info!(
                contract = plan.contract_name,
                account = %existing.account_id,
                "reusing existing deployment"
            );
            return Ok(existing);
        }
    }

    let wasm = fs::read(&plan.wasm_path)
        .map_err(|e| Error::Io(format!("{}: {e}", plan.wasm_path)))?;
    info!(contract = plan.contract_name, bytes = wasm.len(), "deploying");

    let account = deployer
        .create_subaccount(plan.subaccount)
        .initial_balance(NearToken::from_near(config.contract_balance_near.into()))
        .transact()
        .await?
        .into_result()?;
    let contract = account.deploy(&wasm).await?.into_result()?;

    deployer
        .call(contract.id(), "new")
        .args_json(&plan.init_args)
        .gas(Gas::from_tgas(config.gas_tgas))
        .transact()
        .await?
        .into_result()?;

    let record = DeploymentRecord {
        contract_name: plan.contract_name.to_string(),
        account_id: contract.id().to_string(),
        network: registry.network().to_string(),
        abi: plan.abi_path.as_deref().and_then(read_abi),
    };
    registry.save(&record)?;
    info!(contract = plan.contract_name, account = %record.account_id, "deployed");
    Ok(record)
}

fn read_abi(path: &str) -> Option<Value> {
    let raw = match fs::read_to_string(Path::new(path)) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path, error = %e, "ABI not found, deployment recorded without it");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(abi) => Some(abi),
        Err(e) => {
            warn!(path, error = %e, "ABI is not valid JSON, ignoring");
            None
        }
    }
}
