//! Contract bindings for the deployment pipeline and its tests.
//!
//! The interfaces are declared inline; the actual implementations are
//! compiled-contract artifacts external to this repository, referenced on
//! chain by address only.

mod erc20_mintable;
mod factory;
mod pool;

pub use {
    erc20_mintable::ERC20Mintable,
    factory::{CurveStableswapFactoryNG, plain_pool_deployment},
    pool::CurveStableSwapNG,
};

pub use alloy::providers::DynProvider as Provider;

/// Extension trait to attach some useful functions to the contract instance.
pub trait InstanceExt: Sized {
    /// Creates a contract instance at the expected address for the current
    /// network.
    fn deployed(
        provider: &Provider,
    ) -> impl std::future::Future<Output = anyhow::Result<Self>> + Send;
}
