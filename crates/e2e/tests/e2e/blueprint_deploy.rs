use {
    alloy::providers::{DynProvider, Provider},
    blueprint::{EIP5202_PREAMBLE, decode_blueprint},
    deployments::Network,
    e2e::setup::*,
    hex_literal::hex,
};

#[tokio::test]
#[ignore]
async fn local_node_deploys_blueprint() {
    run_test(test).await;
}

async fn test(provider: DynProvider) {
    let mut onchain = OnchainComponents::new(provider.clone());
    let [deployer] = onchain.make_accounts(to_wei(10)).await;

    // Initcode of a minimal contract; the blueprint never executes it, so
    // the exact bytes only matter for the round-trip assertion.
    let initcode = hex!("600a600c600039600a6000f3602a60005260206000f3");
    let address = blueprint::deploy_blueprint(
        &provider,
        Network::MainnetFork,
        deployer.address(),
        &initcode,
    )
    .await
    .unwrap();

    let code = provider.get_code_at(address).await.unwrap();
    assert_eq!(code[..3], EIP5202_PREAMBLE[..]);
    assert_eq!(code[3..], initcode[..]);

    let blueprint = decode_blueprint(&code).unwrap();
    assert_eq!(blueprint.version, 0);
    assert_eq!(blueprint.initcode, initcode);
}
