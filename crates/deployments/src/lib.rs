//! Static deployment data for the stableswap-ng factory rollout.
//!
//! Everything in this crate is reference data authored ahead of time: which
//! networks the factory ships to, who owns and receives fees on each of them,
//! which base pools already exist, and the parameter presets for the pools
//! the deployment pipeline creates.

pub mod base_pools;
pub mod network;
pub mod pools;
pub mod settings;

pub use {
    base_pools::{BASE_POOLS, BasePoolSettings},
    network::Network,
    pools::{AssetType, POOL_SETTINGS, PoolConfigError, PoolSettings, PoolVariant, selector},
    settings::{CURVE_DAO_OWNERSHIP, DaoOwnership, NETWORK_SETTINGS, NetworkSettings},
};

use alloy_primitives::{Address, address};

/// The gauge controller on mainnet.
pub const GAUGE_CONTROLLER: Address = address!("0x2F50D538606Fa9EDD2B11E2446BEb18C9D5846bB");

/// The canonical address provider, deployed at the same address on every
/// supported network.
pub const ADDRESS_PROVIDER: Address = address!("0x0000000022d53366457f9d5e68ec105046fc4383");

/// Multisig funding test deposits and owning the testnet deployments.
pub const FIDDY_RESEARCH: Address = address!("0xE6DA683076b7eD6ce7eC972f21Eb8F91e9137a17");

/// EOA submitting the deployment transactions.
pub const FIDDY_DEPLOYER: Address = address!("0x2d12D0907A388811e3AA855A550F959501d303EE");

/// Dollar value of each coin seeded into freshly deployed pools.
pub const DOLLAR_VALUE_OF_TOKENS_TO_DEPOSIT: u64 = 5;
