use marketplace_scripts::{frontend, init_tracing, Config, DeploymentRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    let registry = DeploymentRegistry::from_config(&config);
    frontend::update_front_end(&config, &registry)?;

    Ok(())
}
