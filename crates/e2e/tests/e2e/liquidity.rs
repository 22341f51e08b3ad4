//! Liquidity fixture flows against a dev deployment of the factory and a
//! pair of mintable test tokens.
//!
//! Requires a running node seeded with the factory and tokens; the
//! deployment is pointed at via environment variables:
//!
//! - `E2E_FACTORY`: address of the stableswap-ng factory
//! - `E2E_MINTABLE_TOKENS`: comma-separated addresses of two 18-decimal
//!   mintable tokens
//! - `E2E_TOKEN_MINTER`: account allowed to mint them

use {
    alloy::{
        primitives::{Address, U256},
        providers::DynProvider,
    },
    contracts::{CurveStableSwapNG, CurveStableswapFactoryNG, ERC20Mintable, plain_pool_deployment},
    deployments::{AssetType, PoolSettings},
    e2e::setup::*,
};

fn env_address(var: &str) -> Address {
    std::env::var(var)
        .unwrap_or_else(|_| panic!("{var} must be set"))
        .parse()
        .unwrap_or_else(|_| panic!("{var} is not an address"))
}

fn env_addresses(var: &str) -> Vec<Address> {
    std::env::var(var)
        .unwrap_or_else(|_| panic!("{var} must be set"))
        .split(',')
        .map(|addr| addr.trim().parse().expect("malformed address list"))
        .collect()
}

#[tokio::test]
#[ignore]
async fn local_node_seeds_plain_pool() {
    run_test(test_plain).await;
}

#[tokio::test]
#[ignore]
async fn local_node_seeds_metapool() {
    run_test(test_meta).await;
}

async fn deploy_plain_pool(
    provider: &DynProvider,
    factory: &CurveStableswapFactoryNG::Instance,
    deployer: Address,
    coins: Vec<Address>,
) -> CurveStableSwapNG::Instance {
    let n_coins = coins.len();
    let settings = PoolSettings {
        name: "Test plain pool",
        symbol: "TST-ng",
        coins,
        a: 1000,
        fee: 1_000_000,
        offpeg_fee_multiplier: 20_000_000_000,
        ma_exp_time: 865,
        implementation_idx: 0,
        asset_types: vec![AssetType::Standard; n_coins],
        method_ids: vec![None; n_coins],
        oracles: vec![Address::ZERO; n_coins],
    };

    plain_pool_deployment(factory, &settings)
        .unwrap()
        .from(deployer)
        .send()
        .await
        .unwrap()
        .watch()
        .await
        .unwrap();

    let count = factory.pool_count().call().await.unwrap();
    let pool = factory
        .pool_list(count - U256::from(1u64))
        .call()
        .await
        .unwrap();
    CurveStableSwapNG::new(pool, provider.clone())
}

async fn test_plain(provider: DynProvider) {
    let factory =
        CurveStableswapFactoryNG::new(env_address("E2E_FACTORY"), provider.clone());
    let minter = env_address("E2E_TOKEN_MINTER");
    let tokens = env_addresses("E2E_MINTABLE_TOKENS")
        .into_iter()
        .map(|addr| MintableToken::new(ERC20Mintable::new(addr, provider.clone()), minter))
        .collect::<Vec<_>>();

    let mut onchain = OnchainComponents::new(provider.clone());
    let accounts = onchain.fixture_accounts(to_wei(10)).await;
    let owner = accounts.owner.address();

    let pool = deploy_plain_pool(
        &provider,
        &factory,
        accounts.deployer.address(),
        tokens.iter().map(|token| *token.address()).collect(),
    )
    .await;

    let deposit_amounts = vec![to_wei(100); tokens.len()];
    onchain
        .mint_account(owner, &tokens, to_wei(10), &deposit_amounts)
        .await;
    onchain
        .approve_account(owner, &tokens, *pool.address())
        .await;
    onchain
        .add_initial_liquidity(owner, &pool, deposit_amounts)
        .await;

    let lp_balance = pool.balanceOf(owner).call().await.unwrap();
    assert!(lp_balance > U256::ZERO);
}

async fn test_meta(provider: DynProvider) {
    let factory =
        CurveStableswapFactoryNG::new(env_address("E2E_FACTORY"), provider.clone());
    let minter = env_address("E2E_TOKEN_MINTER");
    let mut tokens = env_addresses("E2E_MINTABLE_TOKENS")
        .into_iter()
        .map(|addr| MintableToken::new(ERC20Mintable::new(addr, provider.clone()), minter))
        .collect::<Vec<_>>();
    let paired_token = tokens.pop().unwrap();
    let base_pool_tokens = tokens;
    let base_pool_decimals = vec![18u8; base_pool_tokens.len()];

    let mut onchain = OnchainComponents::new(provider.clone());
    let accounts = onchain.fixture_accounts(to_wei(10)).await;
    let deployer = accounts.deployer.address();
    let owner = accounts.owner.address();

    // A metapool needs a registered base pool, so create and register a
    // plain pool out of the first tokens.
    let base_pool = deploy_plain_pool(
        &provider,
        &factory,
        deployer,
        base_pool_tokens
            .iter()
            .map(|token| *token.address())
            .collect(),
    )
    .await;
    factory
        .add_base_pool(
            *base_pool.address(),
            *base_pool.address(),
            vec![AssetType::Standard.into(); base_pool_tokens.len()],
            U256::from(base_pool_tokens.len()),
        )
        .from(deployer)
        .send()
        .await
        .unwrap()
        .watch()
        .await
        .unwrap();

    factory
        .deploy_metapool(
            *base_pool.address(),
            "Test metapool".to_string(),
            "TSTM-ng".to_string(),
            *paired_token.address(),
            U256::from(1000u64),
            U256::from(1_000_000u64),
            U256::from(20_000_000_000u64),
            U256::from(865u64),
            U256::ZERO,
            AssetType::Standard.into(),
            Default::default(),
            Address::ZERO,
        )
        .from(deployer)
        .send()
        .await
        .unwrap()
        .watch()
        .await
        .unwrap();
    let count = factory.pool_count().call().await.unwrap();
    let metapool_address = factory
        .pool_list(count - U256::from(1u64))
        .call()
        .await
        .unwrap();
    let metapool = CurveStableSwapNG::new(metapool_address, provider.clone());

    // The ng pool doubles as its own LP token.
    let base_pool_lp_token = ERC20Mintable::new(*base_pool.address(), provider.clone());

    onchain
        .mint_meta(
            owner,
            &paired_token,
            to_wei(100),
            &base_pool,
            &base_pool_tokens,
            &base_pool_decimals,
        )
        .await;
    onchain
        .add_initial_liquidity_meta(
            accounts.alice.address(),
            &metapool,
            &paired_token,
            &base_pool,
            &base_pool_tokens,
            &base_pool_decimals,
            &base_pool_lp_token,
        )
        .await;

    let lp_balance = metapool.balanceOf(accounts.alice.address()).call().await.unwrap();
    assert!(lp_balance > U256::ZERO);
}
