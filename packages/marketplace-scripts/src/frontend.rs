//! Propagates the marketplace address and ABI to the front-end project.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::deployments::{DeploymentRecord, DeploymentRegistry, NFT_MARKETPLACE};
use crate::{Config, Error};

/// Chain id to deployed marketplace addresses, as the front-end reads it.
pub type ContractAddresses = Map<String, Value>;

/// Returns `false` when the update is disabled.
pub fn update_front_end(config: &Config, registry: &DeploymentRegistry) -> Result<bool, Error> {
    if !config.update_front_end {
        debug!("UPDATE_FRONTEND not set, skipping front-end update");
        return Ok(false);
    }
    info!("writing to frontend");
    let marketplace = registry.get(NFT_MARKETPLACE)?;
    update_contract_addresses(
        Path::new(&config.front_end_contracts_file),
        registry.network(),
        &marketplace.account_id,
    )?;
    update_abi(Path::new(&config.front_end_abi_file), &marketplace)?;
    info!("frontend written");
    Ok(true)
}

/// Appends `address` under `chain_id` unless already present. A missing file
/// starts out empty; other chains' entries are kept as-is.
pub fn update_contract_addresses(
    path: &Path,
    chain_id: &str,
    address: &str,
) -> Result<ContractAddresses, Error> {
    let mut addresses: ContractAddresses = if path.exists() {
        serde_json::from_str(&fs::read_to_string(path)?)?
    } else {
        Map::new()
    };

    let entry = addresses
        .entry(chain_id.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    let list = entry.as_array_mut().ok_or_else(|| {
        Error::Json(format!("{}: entry for {chain_id} is not a list", path.display()))
    })?;
    if !list.iter().any(|a| a.as_str() == Some(address)) {
        list.push(Value::String(address.to_string()));
    }

    write_json(path, &Value::Object(addresses.clone()))?;
    Ok(addresses)
}

pub fn update_abi(path: &Path, record: &DeploymentRecord) -> Result<(), Error> {
    let abi = record.abi.as_ref().ok_or_else(|| {
        Error::Config(format!("no ABI recorded for {}", record.contract_name))
    })?;
    write_json(path, abi)
}

fn write_json(path: &Path, value: &Value) -> Result<(), Error> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
