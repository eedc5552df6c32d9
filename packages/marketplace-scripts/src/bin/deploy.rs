use marketplace_scripts::{deploy, frontend, init_tracing, network, Config, DeploymentRegistry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    info!(network = %config.network, reset = config.reset, "Deploying contracts");

    let deployer = network::deployer_account(&config).await?;
    let registry = DeploymentRegistry::from_config(&config);

    for record in deploy::deploy_all(&deployer, &registry, &config).await? {
        info!(contract = %record.contract_name, account = %record.account_id, "ready");
    }
    frontend::update_front_end(&config, &registry)?;

    Ok(())
}
