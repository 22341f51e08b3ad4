//! Submits blueprint deployment transactions.

use {
    crate::blueprint_initcode,
    alloy::{
        eips::BlockNumberOrTag,
        network::TransactionBuilder,
        primitives::Address,
        providers::{DynProvider, Provider},
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, Result},
    deployments::Network,
};

/// 0.5 gwei, matching what the deployment multisig is willing to tip.
const MAX_PRIORITY_FEE_PER_GAS: u128 = 500_000_000;

/// EIP-1559 fee parameters for a deployment transaction. `None` fields leave
/// the choice to the node.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TxFees {
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
}

/// Fee parameters for `network`: forks and sepolia run with whatever the
/// node picks, live networks cap at 1.2x the current base fee.
pub async fn tx_fees(provider: &DynProvider, network: Network) -> Result<TxFees> {
    if network.is_fork() || network == Network::Sepolia {
        return Ok(TxFees::default());
    }

    let block = provider
        .get_block_by_number(BlockNumberOrTag::Latest)
        .await
        .context("failed to fetch latest block")?
        .context("node returned no latest block")?;
    let base_fee: u128 = block
        .header
        .base_fee_per_gas
        .context("latest block carries no base fee")?
        .into();

    Ok(TxFees {
        max_fee_per_gas: Some(base_fee * 12 / 10),
        max_priority_fee_per_gas: Some(MAX_PRIORITY_FEE_PER_GAS),
    })
}

/// Wraps `initcode` into its EIP-5202 bootstrap form, submits it as a
/// contract creation and returns the blueprint's address.
pub async fn deploy_blueprint(
    provider: &DynProvider,
    network: Network,
    from: Address,
    initcode: &[u8],
) -> Result<Address> {
    let deploy_code = blueprint_initcode(initcode)?;
    let fees = tx_fees(provider, network).await?;

    let mut tx = TransactionRequest::default()
        .with_from(from)
        .with_deploy_code(deploy_code);
    if let Some(max_fee) = fees.max_fee_per_gas {
        tx = tx.with_max_fee_per_gas(max_fee);
    }
    if let Some(max_priority_fee) = fees.max_priority_fee_per_gas {
        tx = tx.with_max_priority_fee_per_gas(max_priority_fee);
    }

    let receipt = provider
        .send_transaction(tx)
        .await
        .context("failed to submit blueprint deployment")?
        .get_receipt()
        .await
        .context("failed to fetch blueprint deployment receipt")?;
    let address = receipt
        .contract_address
        .context("deployment receipt carries no contract address")?;

    tracing::info!(%address, "blueprint deployed");
    Ok(address)
}
