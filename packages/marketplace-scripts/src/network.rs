//! Connecting to the configured network and loading the deployer account.

use std::path::PathBuf;

use near_workspaces::network::{Mainnet, Sandbox, Testnet, ValidatorKey};
use near_workspaces::{Account, Worker};
use tracing::info;

use crate::{Config, Error, NetworkKind};

const SANDBOX_RPC: &str = "http://localhost:3030";

/// Attaches to an already running sandbox node (`validator_home` holds its key).
pub async fn connect_sandbox(config: &Config) -> Result<Worker<Sandbox>, Error> {
    let rpc = config.rpc_url.as_deref().unwrap_or(SANDBOX_RPC);
    let worker = near_workspaces::sandbox()
        .rpc_addr(rpc)
        .validator_key(ValidatorKey::HomeDir(PathBuf::from(&config.validator_home)))
        .await?;
    Ok(worker)
}

pub async fn connect_testnet(config: &Config) -> Result<Worker<Testnet>, Error> {
    let worker = match config.rpc_url.as_deref() {
        Some(rpc) => near_workspaces::testnet().rpc_addr(rpc).await?,
        None => near_workspaces::testnet().await?,
    };
    Ok(worker)
}

pub async fn connect_mainnet(config: &Config) -> Result<Worker<Mainnet>, Error> {
    let worker = match config.rpc_url.as_deref() {
        Some(rpc) => near_workspaces::mainnet().rpc_addr(rpc).await?,
        None => near_workspaces::mainnet().await?,
    };
    Ok(worker)
}

/// Account that signs deploy, mint and list transactions.
pub async fn deployer_account(config: &Config) -> Result<Account, Error> {
    let credentials = config.credentials_path()?;
    let account = match config.network {
        NetworkKind::Sandbox => Account::from_file(&credentials, &connect_sandbox(config).await?)?,
        NetworkKind::Testnet => Account::from_file(&credentials, &connect_testnet(config).await?)?,
        NetworkKind::Mainnet => Account::from_file(&credentials, &connect_mainnet(config).await?)?,
    };
    info!(network = %config.network, account = %account.id(), "loaded deployer");
    Ok(account)
}
