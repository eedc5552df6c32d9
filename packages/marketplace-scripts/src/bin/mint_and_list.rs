use marketplace_scripts::{init_tracing, mint, network, Config, DeploymentRegistry};
use near_workspaces::types::Gas;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    let price = config.list_price_yocto()?;
    let seller = network::deployer_account(&config).await?;
    let registry = DeploymentRegistry::from_config(&config);

    let listed = mint::mint_and_list(&seller, &registry, price, Gas::from_tgas(config.gas_tgas)).await?;
    info!(
        nft = %listed.nft_contract_id,
        marketplace = %listed.marketplace_id,
        token_id = %listed.token_id,
        "done"
    );

    Ok(())
}
