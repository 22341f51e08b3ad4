mod onchain_components;

pub use onchain_components::*;

use {
    crate::local_node::{NODE_HOST, Resetter},
    alloy::{
        primitives::U256,
        providers::{DynProvider, Provider, ProviderBuilder},
    },
    futures::FutureExt,
    std::{
        future::Future,
        panic::{self, AssertUnwindSafe},
        sync::Mutex,
    },
};

/// Converts a whole-unit amount into wei, assuming 18 decimals.
pub fn to_wei(base: u64) -> U256 {
    U256::from(base) * U256::from(10u64).pow(U256::from(18u64))
}

static NODE_MUTEX: Mutex<()> = Mutex::new(());

/// *Testing* function that takes a closure and runs it against a local Anvil
/// node. Before each test, it creates a snapshot of the current state of the
/// chain. The saved state is restored at the end of the test.
///
/// This function also initializes tracing and sets the panic hook.
///
/// Note that tests called with this function will not run simultaneously.
pub async fn run_test<F, Fut>(f: F)
where
    F: FnOnce(DynProvider) -> Fut,
    Fut: Future<Output = ()>,
{
    observe::tracing::initialize_reentrant("warn,blueprint=debug,e2e=debug");

    // The mutex guarantees that no more than a test at a time is running on
    // the testing node.
    // Note that the mutex is expected to become poisoned if a test panics.
    // This is not relevant for us as we are not interested in the data stored
    // in it but rather in the locked state.
    let _lock = NODE_MUTEX.lock();

    let provider = node_provider(NODE_HOST);
    let resetter = Resetter::new(&provider).await;

    // Hack: the closure may actually be unwind unsafe; moreover,
    // `catch_unwind` does not catch some types of panics. In these cases, the
    // state of the node is not restored. This is not considered an issue
    // since this function is supposed to be used in a test environment.
    let result = AssertUnwindSafe(f(provider.clone())).catch_unwind().await;

    resetter.reset().await;

    if let Err(err) = result {
        panic::resume_unwind(err);
    }
}

/// Connects to the node at `url`.
pub fn node_provider(url: &str) -> DynProvider {
    ProviderBuilder::new()
        .connect_http(url.parse().expect("invalid node url"))
        .erased()
}
