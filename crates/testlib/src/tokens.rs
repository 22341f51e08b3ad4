//! Mainnet addresses of the tokens the base pools are composed of.

use alloy_primitives::{Address, address};

/// Address for the `DAI` token.
pub const DAI: Address = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");

/// Address for the `USDC` token.
pub const USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// Address for the `USDT` token.
pub const USDT: Address = address!("0xdAC17F958D2ee523a2206206994597C13D831ec7");

/// Address for the `FRAX` token.
pub const FRAX: Address = address!("0x853d955aCEf822Db058eb8505911ED77F175b99e");

/// Address for the `USDP` token.
pub const USDP: Address = address!("0x8E870D67F660D95d5be530380D0eC0bd388289E1");

/// Address for the `sBTC` token.
pub const SBTC: Address = address!("0xfE18be6b3Bd88A2D2A7f928d00292E7a9963CfC6");

/// Address for the `WBTC` token.
pub const WBTC: Address = address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");

/// Address for the `3CRV` LP token of the 3pool.
pub const THREE_CRV: Address = address!("0x6c3F90f043a72FA612cbac8115EE7e52BDe6E490");
