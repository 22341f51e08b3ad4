//! Existing liquidity pools that metapools can pair against.

use {
    crate::{network::Network, pools::AssetType},
    alloy_primitives::{Address, address},
    maplit::hashmap,
    std::{collections::HashMap, sync::LazyLock},
};

/// An already deployed pool registered as a metapool base.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasePoolSettings {
    pub pool: Address,
    pub lp_token: Address,
    pub coins: Vec<Address>,
    pub asset_types: Vec<AssetType>,
    pub n_coins: usize,
}

impl BasePoolSettings {
    /// Base pools registered for `network`. Networks without an entry have no
    /// base pool registry yet; networks with an empty list are live but have
    /// nothing registered.
    pub fn for_network(network: Network) -> Option<&'static [Self]> {
        BASE_POOLS.get(&network).map(Vec::as_slice)
    }
}

pub static BASE_POOLS: LazyLock<HashMap<Network, Vec<BasePoolSettings>>> = LazyLock::new(|| {
    let mainnet = vec![
        // 3pool
        BasePoolSettings {
            pool: address!("0xbEbc44782C7dB0a1A60Cb6fe97d0b483032FF1C7"),
            lp_token: address!("0x6c3F90f043a72FA612cbac8115EE7e52BDe6E490"),
            coins: vec![
                address!("0x6B175474E89094C44Da98b954EedeAC495271d0F"), // dai
                address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), // usdc
                address!("0xdAC17F958D2ee523a2206206994597C13D831ec7"), // usdt
            ],
            asset_types: vec![AssetType::Standard; 3],
            n_coins: 3,
        },
        // fraxusdc
        BasePoolSettings {
            pool: address!("0xDcEF968d416a41Cdac0ED8702fAC8128A64241A2"),
            lp_token: address!("0x3175Df0976dFA876431C2E9eE6Bc45b65d3473CC"),
            coins: vec![
                address!("0x853d955aCEf822Db058eb8505911ED77F175b99e"), // frax
                address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), // usdc
            ],
            asset_types: vec![AssetType::Standard; 2],
            n_coins: 2,
        },
        // sbtc/wbtc
        BasePoolSettings {
            pool: address!("0xf253f83AcA21aAbD2A20553AE0BF7F65C755A07F"),
            lp_token: address!("0x051d7e5609917Bd9b73f04BAc0DED8Dd46a74301"),
            coins: vec![
                address!("0xfE18be6b3Bd88A2D2A7f928d00292E7a9963CfC6"), // sbtc
                address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599"), // wbtc
            ],
            asset_types: vec![AssetType::Standard; 2],
            n_coins: 2,
        },
        // fraxusdp
        BasePoolSettings {
            pool: address!("0xaE34574AC03A15cd58A92DC79De7B1A0800F1CE3"),
            lp_token: address!("0xFC2838a17D8e8B1D5456E0a351B0708a09211147"),
            coins: vec![
                address!("0x853d955aCEf822Db058eb8505911ED77F175b99e"), // frax
                address!("0x8E870D67F660D95d5be530380D0eC0bd388289E1"), // usdp
            ],
            asset_types: vec![AssetType::Standard; 2],
            n_coins: 2,
        },
    ];
    hashmap! {
        Network::MainnetFork => mainnet.clone(),
        Network::Mainnet => mainnet,
        Network::ArbitrumOne => vec![],
        Network::Optimism => vec![],
        Network::Gnosis => vec![
            // x3crv
            BasePoolSettings {
                pool: address!("0x7f90122bf0700f9e7e1f688fe926940e8839f353"),
                lp_token: address!("0x1337BedC9D22ecbe766dF105c9623922A27963EC"),
                coins: vec![
                    address!("0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"), // wxdai
                    address!("0xDDAfbb505ad214D7b80b1f830fcCc89B60fb7A83"), // usdc
                    address!("0x4ECaBa5870353805a9F068101A40E0f32ed605C6"), // usdt
                ],
                asset_types: vec![AssetType::Standard; 3],
                n_coins: 3,
            },
        ],
        Network::Polygon => vec![],
        Network::Base => vec![],
    }
});
