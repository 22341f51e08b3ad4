use {
    alloy::primitives::Address,
    clap::{Parser, Subcommand},
    deployments::Network,
    std::path::PathBuf,
    url::Url,
};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// The network the node is expected to be on, in `ecosystem:network`
    /// notation.
    #[clap(long, env, default_value = "ethereum:mainnet-fork")]
    pub network: Network,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deploy contract initcode as an EIP-5202 blueprint.
    DeployBlueprint {
        /// Path to a hex-encoded initcode artifact.
        initcode: PathBuf,

        /// Account submitting the deployment transaction. Must be unlocked
        /// on (or impersonated by) the node.
        #[clap(long, env)]
        from: Address,
    },
    /// Print the deployment data tables for the selected network.
    ShowConfig,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "network: {}", self.network)?;
        Ok(())
    }
}
