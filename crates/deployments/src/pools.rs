//! Construction presets for the pools the pipeline deploys.

use {
    crate::network::Network,
    alloy_primitives::{Address, address, keccak256},
    maplit::hashmap,
    std::{collections::HashMap, fmt, sync::LazyLock},
    thiserror::Error,
};

/// The factory accepts between 2 and 8 coins per pool.
pub const MIN_COINS: usize = 2;
pub const MAX_COINS: usize = 8;

/// Per-coin tag telling pool implementations how to read a coin's balance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum AssetType {
    /// Plain ERC-20 with static balances.
    Standard = 0,
    /// Balance scaled by an external rate oracle.
    Oracle = 1,
    /// Rebasing token, balances change underneath holders.
    Rebasing = 2,
    /// ERC-4626 vault share.
    Erc4626 = 3,
}

impl From<AssetType> for u8 {
    fn from(asset_type: AssetType) -> Self {
        asset_type as u8
    }
}

/// The preset families a pool can be created from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PoolVariant {
    Plain,
    Oracles,
    Rebasing,
    MetaPlain,
    MetaOracles,
    MetaRebasing,
}

impl PoolVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Oracles => "oracles",
            Self::Rebasing => "rebasing",
            Self::MetaPlain => "meta-plain",
            Self::MetaOracles => "meta-oracle",
            Self::MetaRebasing => "meta-rebasing",
        }
    }

    pub fn is_meta(&self) -> bool {
        matches!(self, Self::MetaPlain | Self::MetaOracles | Self::MetaRebasing)
    }
}

impl fmt::Display for PoolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one `deploy_plain_pool`/`deploy_metapool` call.
///
/// `method_ids` and `oracles` describe the external rate oracle of each coin;
/// coins without one carry `None` and the zero address respectively.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSettings {
    pub name: &'static str,
    pub symbol: &'static str,
    pub coins: Vec<Address>,
    pub a: u64,
    pub fee: u64,
    pub offpeg_fee_multiplier: u64,
    pub ma_exp_time: u64,
    pub implementation_idx: u64,
    pub asset_types: Vec<AssetType>,
    pub method_ids: Vec<Option<[u8; 4]>>,
    pub oracles: Vec<Address>,
}

#[derive(Debug, Error)]
pub enum PoolConfigError {
    #[error("pool {name:?} must have between 2 and 8 coins, got {got}")]
    CoinCount { name: &'static str, got: usize },
    #[error("pool {name:?} has {n_coins} coins but {field} has {got} entries")]
    LengthMismatch {
        name: &'static str,
        field: &'static str,
        n_coins: usize,
        got: usize,
    },
}

impl PoolSettings {
    /// Checks that the per-coin arrays line up with the coin list.
    pub fn validate(&self) -> Result<(), PoolConfigError> {
        let n_coins = self.coins.len();
        if !(MIN_COINS..=MAX_COINS).contains(&n_coins) {
            return Err(PoolConfigError::CoinCount {
                name: self.name,
                got: n_coins,
            });
        }
        for (field, got) in [
            ("asset_types", self.asset_types.len()),
            ("method_ids", self.method_ids.len()),
            ("oracles", self.oracles.len()),
        ] {
            if got != n_coins {
                return Err(PoolConfigError::LengthMismatch {
                    name: self.name,
                    field,
                    n_coins,
                    got,
                });
            }
        }
        Ok(())
    }
}

/// 4-byte function selector for a canonical signature like
/// `"exchangeRate()"`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

pub static POOL_SETTINGS: LazyLock<HashMap<Network, HashMap<PoolVariant, Vec<PoolSettings>>>> =
    LazyLock::new(|| {
        hashmap! {
            Network::Gnosis => hashmap! {
                PoolVariant::Plain => vec![PoolSettings {
                    name: "WXDAI/USDC/USDT",
                    symbol: "3pool-ng",
                    coins: vec![
                        address!("0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"), // wxdai
                        address!("0xDDAfbb505ad214D7b80b1f830fcCc89B60fb7A83"), // usdc
                        address!("0x4ECaBa5870353805a9F068101A40E0f32ed605C6"), // usdt
                    ],
                    a: 1000,
                    fee: 1_000_000,
                    offpeg_fee_multiplier: 20_000_000_000,
                    ma_exp_time: 865,
                    implementation_idx: 0,
                    asset_types: vec![AssetType::Standard; 3],
                    method_ids: vec![None; 3],
                    oracles: vec![Address::ZERO; 3],
                }],
                PoolVariant::Oracles => vec![PoolSettings {
                    name: "WETH<>wstETH",
                    symbol: "wstETH-ng",
                    coins: vec![
                        address!("0x6C76971f98945AE98dD7d4DFcA8711ebea946eA6"), // wsteth
                        address!("0x6A023CCd1ff6F2045C3309768eAd9E68F978f6e1"), // weth
                    ],
                    a: 500,
                    fee: 1_000_000,
                    offpeg_fee_multiplier: 20_000_000_000,
                    ma_exp_time: 865,
                    implementation_idx: 0,
                    asset_types: vec![AssetType::Oracle, AssetType::Standard],
                    method_ids: vec![Some(selector("exchangeRate()")), None],
                    oracles: vec![
                        address!("0x6C76971f98945AE98dD7d4DFcA8711ebea946eA6"),
                        Address::ZERO,
                    ],
                }],
                PoolVariant::Rebasing => vec![PoolSettings {
                    name: "sGNO<>GNO",
                    symbol: "sGNO-ng",
                    coins: vec![
                        address!("0xA4eF9Da5BA71Cc0D2e5E877a910A37eC43420445"), // sgno
                        address!("0x9C58BAcC331c9aa871AFD802DB6379a98e80CEdb"), // gno
                    ],
                    a: 50,
                    fee: 1_000_000,
                    offpeg_fee_multiplier: 20_000_000_000,
                    ma_exp_time: 865,
                    implementation_idx: 0,
                    asset_types: vec![AssetType::Rebasing, AssetType::Standard],
                    method_ids: vec![None; 2],
                    oracles: vec![Address::ZERO; 2],
                }],
                PoolVariant::MetaPlain => vec![],
                PoolVariant::MetaOracles => vec![],
                PoolVariant::MetaRebasing => vec![],
            },
        }
    });
