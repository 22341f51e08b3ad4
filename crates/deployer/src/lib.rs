pub mod arguments;

use {
    crate::arguments::{Arguments, Command},
    alloy::providers::{Provider, ProviderBuilder},
    anyhow::{Context, Result},
    deployments::{BasePoolSettings, NetworkSettings, POOL_SETTINGS},
};

pub async fn main(args: Arguments) -> Result<()> {
    match args.command {
        Command::DeployBlueprint { initcode, from } => {
            let provider = ProviderBuilder::new()
                .connect_http(args.node_url.as_str().parse().context("invalid node url")?)
                .erased();
            let chain_id = provider
                .get_chain_id()
                .await
                .context("could not fetch current chain id")?;
            anyhow::ensure!(
                chain_id == args.network.chain_id(),
                "node is on chain {chain_id} but {} expects chain {}",
                args.network,
                args.network.chain_id(),
            );

            let artifact = std::fs::read_to_string(&initcode)
                .with_context(|| format!("failed to read {}", initcode.display()))?;
            let initcode = const_hex::decode(artifact.trim())
                .context("initcode artifact is not hex encoded")?;

            let address =
                blueprint::deploy_blueprint(&provider, args.network, from, &initcode).await?;
            println!("blueprint deployed at: {address}");
        }
        Command::ShowConfig => {
            let network = args.network;
            match NetworkSettings::for_network(network) {
                Some(settings) => println!("{settings:#?}"),
                None => println!("no network settings for {network}"),
            }
            if let Some(base_pools) = BasePoolSettings::for_network(network) {
                println!("{base_pools:#?}");
            }
            if let Some(presets) = POOL_SETTINGS.get(&network) {
                println!("{presets:#?}");
            }
        }
    }
    Ok(())
}
