use {std::fmt, thiserror::Error};

/// Represents each network the factory ships to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Network {
    Mainnet,
    /// A locally forked copy of mainnet. Shares all of mainnet's data tables
    /// but uses the node's default fee parameters.
    MainnetFork,
    Sepolia,
    ArbitrumOne,
    Optimism,
    Polygon,
    Avalanche,
    Gnosis,
    Fantom,
    Celo,
    Kava,
    Moonbeam,
    Aurora,
    Base,
}

impl Network {
    /// Returns the network's chain ID.
    pub fn chain_id(&self) -> u64 {
        // You can find a list of available networks by network and chain id
        // here: https://chainid.network/chains.json
        match self {
            Self::Mainnet | Self::MainnetFork => 1,
            Self::Sepolia => 11155111,
            Self::ArbitrumOne => 42161,
            Self::Optimism => 10,
            Self::Polygon => 137,
            Self::Avalanche => 43114,
            Self::Gnosis => 100,
            Self::Fantom => 250,
            Self::Celo => 42220,
            Self::Kava => 2222,
            Self::Moonbeam => 1284,
            Self::Aurora => 1313161554,
            Self::Base => 8453,
        }
    }

    /// The `ecosystem:network` spelling used to key the data tables and in
    /// deployment config files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "ethereum:mainnet",
            Self::MainnetFork => "ethereum:mainnet-fork",
            Self::Sepolia => "ethereum:sepolia",
            Self::ArbitrumOne => "arbitrum:mainnet",
            Self::Optimism => "optimism:mainnet",
            Self::Polygon => "polygon:mainnet",
            Self::Avalanche => "avalanche:mainnet",
            Self::Gnosis => "gnosis:mainnet",
            Self::Fantom => "fantom:mainnet",
            Self::Celo => "celo:mainnet",
            Self::Kava => "kava:mainnet",
            Self::Moonbeam => "moonbeam",
            Self::Aurora => "aurora",
            Self::Base => "base:mainnet",
        }
    }

    /// Whether this target is a forked node rather than a live network.
    pub fn is_fork(&self) -> bool {
        matches!(self, Self::MainnetFork)
    }

    /// All supported networks, in table order.
    pub fn all() -> &'static [Network] {
        &[
            Self::Mainnet,
            Self::MainnetFork,
            Self::Sepolia,
            Self::ArbitrumOne,
            Self::Optimism,
            Self::Polygon,
            Self::Avalanche,
            Self::Gnosis,
            Self::Fantom,
            Self::Celo,
            Self::Kava,
            Self::Moonbeam,
            Self::Aurora,
            Self::Base,
        ]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown network {0:?}")]
pub struct UnknownNetwork(String);

impl std::str::FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::all()
            .iter()
            .find(|network| network.name() == s)
            .copied()
            .ok_or_else(|| UnknownNetwork(s.to_string()))
    }
}
