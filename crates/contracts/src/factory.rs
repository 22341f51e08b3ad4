//! The stableswap-ng factory.

use {
    alloy::{
        contract::SolCallBuilder,
        primitives::{FixedBytes, U256},
        providers::DynProvider,
    },
    deployments::{PoolConfigError, PoolSettings},
};

#[allow(non_snake_case)]
mod private {
    alloy::sol! {
        #[allow(missing_docs)]
        #[sol(rpc)]
        contract CurveStableswapFactoryNG {
            function deploy_plain_pool(
                string name,
                string symbol,
                address[] coins,
                uint256 A,
                uint256 fee,
                uint256 offpeg_fee_multiplier,
                uint256 ma_exp_time,
                uint256 implementation_idx,
                uint8[] asset_types,
                bytes4[] method_ids,
                address[] oracles
            ) external returns (address);

            function deploy_metapool(
                address base_pool,
                string name,
                string symbol,
                address coin,
                uint256 A,
                uint256 fee,
                uint256 offpeg_fee_multiplier,
                uint256 ma_exp_time,
                uint256 implementation_idx,
                uint8 asset_type,
                bytes4 method_id,
                address oracle
            ) external returns (address);

            function add_base_pool(
                address base_pool,
                address base_lp_token,
                uint8[] asset_types,
                uint256 n_coins
            ) external;

            function pool_count() external view returns (uint256);
            function pool_list(uint256 i) external view returns (address);
        }
    }
}

#[allow(non_snake_case)]
pub mod CurveStableswapFactoryNG {
    use {
        super::private,
        alloy::{
            primitives::{Address, address},
            providers::{DynProvider, Provider},
        },
        anyhow::{Context, Result},
        std::{collections::HashMap, sync::LazyLock},
    };

    pub use private::CurveStableswapFactoryNG::*;

    pub type Instance = CurveStableswapFactoryNGInstance<DynProvider>;

    pub static DEPLOYMENT_INFO: LazyLock<HashMap<u64, Address>> = LazyLock::new(|| {
        maplit::hashmap! {
            // mainnet (and thereby mainnet forks)
            1 => address!("0x6a8cbed756804b16e05e741edabd5cb544ae21bf"),
        }
    });

    impl crate::InstanceExt for Instance {
        fn deployed(provider: &DynProvider) -> impl Future<Output = Result<Self>> + Send {
            async move {
                let chain_id = provider
                    .get_chain_id()
                    .await
                    .context("could not fetch current chain id")?;
                let address = DEPLOYMENT_INFO
                    .get(&chain_id)
                    .with_context(|| format!("no deployment info for chain {chain_id:?}"))?;

                Ok(Instance::new(*address, provider.clone()))
            }
        }
    }
}

/// Prepares the `deploy_plain_pool` call for a parameter preset, after
/// checking the preset's per-coin arrays line up.
pub fn plain_pool_deployment<'a>(
    factory: &'a CurveStableswapFactoryNG::Instance,
    settings: &PoolSettings,
) -> Result<
    SolCallBuilder<&'a DynProvider, CurveStableswapFactoryNG::deploy_plain_poolCall>,
    PoolConfigError,
> {
    settings.validate()?;
    Ok(factory.deploy_plain_pool(
        settings.name.to_string(),
        settings.symbol.to_string(),
        settings.coins.clone(),
        U256::from(settings.a),
        U256::from(settings.fee),
        U256::from(settings.offpeg_fee_multiplier),
        U256::from(settings.ma_exp_time),
        U256::from(settings.implementation_idx),
        settings.asset_types.iter().copied().map(u8::from).collect(),
        settings
            .method_ids
            .iter()
            .map(|method_id| FixedBytes::from(method_id.unwrap_or_default()))
            .collect(),
        settings.oracles.clone(),
    ))
}
