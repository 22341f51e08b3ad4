use alloy::{
    primitives::U256,
    providers::{DynProvider, Provider},
};

pub const NODE_HOST: &str = "http://127.0.0.1:8545";

/// Restores the node to the state it had when the resetter was created.
///
/// Relevant RPC calls for Anvil can be found at:
/// https://getfoundry.sh/anvil/reference
pub struct Resetter {
    provider: DynProvider,
    snapshot_id: U256,
}

impl Resetter {
    pub async fn new(provider: &DynProvider) -> Self {
        let snapshot_id = provider
            .raw_request("evm_snapshot".into(), ())
            .await
            .expect("test network must support evm_snapshot");
        Self {
            provider: provider.clone(),
            snapshot_id,
        }
    }

    pub async fn reset(&self) {
        let reverted: bool = self
            .provider
            .raw_request("evm_revert".into(), [self.snapshot_id])
            .await
            .expect("test network must support evm_revert");
        assert!(reverted, "failed to revert to snapshot");
    }
}
