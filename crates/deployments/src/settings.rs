//! Per-network governance and registry addresses.

use {
    crate::{ADDRESS_PROVIDER, FIDDY_RESEARCH, network::Network},
    alloy_primitives::{Address, address},
    maplit::hashmap,
    std::{collections::HashMap, sync::LazyLock},
};

/// Governance and fee plumbing for one network.
///
/// Networks where the sidechain ownership contracts have not been deployed
/// yet carry `None` in the corresponding field; the deployment pipeline
/// refuses to parameterize contracts for those.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkSettings {
    pub dao_ownership: Option<Address>,
    pub fee_receiver: Option<Address>,
    pub metaregistry: Option<Address>,
    pub base_pool_registry: Option<Address>,
    pub address_provider: Address,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            dao_ownership: None,
            fee_receiver: None,
            metaregistry: None,
            base_pool_registry: None,
            address_provider: ADDRESS_PROVIDER,
        }
    }
}

impl NetworkSettings {
    /// Looks up the settings record for `network`.
    pub fn for_network(network: Network) -> Option<&'static Self> {
        NETWORK_SETTINGS.get(&network)
    }
}

/// The Curve DAO ownership record on mainnet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DaoOwnership {
    pub agent: Address,
    pub voting: Address,
    pub token: Address,
    /// Vote quorum, in percent.
    pub quorum: u64,
}

pub const CURVE_DAO_OWNERSHIP: DaoOwnership = DaoOwnership {
    agent: address!("0x40907540d8a6c65c637785e8f8b742ae6b0b9968"),
    voting: address!("0xe478de485ad2fe566d49342cbd03e49ed7db3356"),
    token: address!("0x5f3b5DfEb7B28CDbD7FAba78963EE202a494e2A2"),
    quorum: 30,
};

pub static NETWORK_SETTINGS: LazyLock<HashMap<Network, NetworkSettings>> = LazyLock::new(|| {
    let mainnet = NetworkSettings {
        dao_ownership: Some(address!("0x40907540d8a6C65c637785e8f8B742ae6b0b9968")),
        fee_receiver: Some(address!("0xeCb456EA5365865EbAb8a2661B0c503410e9B347")),
        metaregistry: Some(address!("0xF98B45FA17DE75FB1aD0e7aFD971b0ca00e379fC")),
        base_pool_registry: Some(address!("0xDE3eAD9B2145bBA2EB74007e58ED07308716B725")),
        ..Default::default()
    };
    hashmap! {
        Network::MainnetFork => mainnet.clone(),
        Network::Mainnet => mainnet,
        Network::Sepolia => NetworkSettings {
            dao_ownership: Some(FIDDY_RESEARCH),
            fee_receiver: Some(FIDDY_RESEARCH),
            ..Default::default()
        },
        Network::ArbitrumOne => NetworkSettings {
            dao_ownership: Some(address!("0xb055ebbacc8eefc166c169e9ce2886d0406ab49b")),
            fee_receiver: Some(address!("0xd4f94d0aaa640bbb72b5eec2d85f6d114d81a88e")),
            ..Default::default()
        },
        Network::Optimism => NetworkSettings {
            dao_ownership: Some(address!("0xB055EbbAcc8Eefc166c169e9Ce2886D0406aB49b")),
            fee_receiver: Some(address!("0xbF7E49483881C76487b0989CD7d9A8239B20CA41")),
            ..Default::default()
        },
        Network::Polygon => NetworkSettings {
            dao_ownership: Some(address!("0xB055EbbAcc8Eefc166c169e9Ce2886D0406aB49b")),
            fee_receiver: Some(address!("0x774D1Dba98cfBD1F2Bc3A1F59c494125e07C48F9")),
            ..Default::default()
        },
        Network::Avalanche => NetworkSettings {
            dao_ownership: Some(address!("0xbabe61887f1de2713c6f97e567623453d3c79f67")),
            fee_receiver: Some(address!("0x06534b0BF7Ff378F162d4F348390BDA53b15fA35")),
            ..Default::default()
        },
        // TODO: replace with the sidechain ownership contract and pool proxy
        // once those are deployed on gnosis.
        Network::Gnosis => NetworkSettings {
            dao_ownership: Some(address!("0xB055EbbAcc8Eefc166c169e9Ce2886D0406aB49b")),
            fee_receiver: Some(address!("0xB055EbbAcc8Eefc166c169e9Ce2886D0406aB49b")),
            ..Default::default()
        },
        Network::Fantom => NetworkSettings {
            dao_ownership: Some(address!("0xB055EbbAcc8Eefc166c169e9Ce2886D0406aB49b")),
            fee_receiver: Some(address!("0x2B039565B2b7a1A9192D4847fbd33B25b836B950")),
            ..Default::default()
        },
        Network::Celo => NetworkSettings {
            dao_ownership: Some(address!("0x56bc95Ded2BEF162131905dfd600F2b9F1B380a4")),
            ..Default::default()
        },
        Network::Kava => NetworkSettings::default(),
        Network::Moonbeam => NetworkSettings::default(),
        Network::Aurora => NetworkSettings::default(),
    }
});
