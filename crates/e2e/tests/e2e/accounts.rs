use {
    alloy::providers::{DynProvider, Provider},
    e2e::setup::*,
    std::collections::HashSet,
};

#[tokio::test]
#[ignore]
async fn local_node_funds_fixture_accounts() {
    run_test(test).await;
}

async fn test(provider: DynProvider) {
    let mut onchain = OnchainComponents::new(provider.clone());
    let accounts = onchain.fixture_accounts(to_wei(10)).await;

    for account in [&accounts.deployer, &accounts.owner, &accounts.fee_receiver] {
        let balance = provider.get_balance(account.address()).await.unwrap();
        assert_eq!(balance, to_wei(10));
    }

    // Generated accounts are unique and deterministic in order.
    let mut seen = HashSet::new();
    for user in accounts.users() {
        assert!(seen.insert(user.address()));
    }

    let [extra] = onchain.make_accounts(to_wei(1)).await;
    assert!(seen.insert(extra.address()));
    let balance = provider.get_balance(extra.address()).await.unwrap();
    assert_eq!(balance, to_wei(1));
}
