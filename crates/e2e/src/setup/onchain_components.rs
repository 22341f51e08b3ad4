use {
    alloy::{
        primitives::{Address, U256},
        providers::{DynProvider, ext::AnvilApi},
        signers::local::PrivateKeySigner,
    },
    contracts::{CurveStableSwapNG, ERC20Mintable},
    std::ops::Deref,
};

/// Whole-token amount each base pool coin is seeded with, split across the
/// pool's coins.
const BASE_POOL_SEED_TOKENS: u64 = 1_000_000 / 3 + 1;

#[derive(Clone, Debug)]
pub struct TestAccount {
    pub signer: PrivateKeySigner,
}

impl TestAccount {
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

struct AccountGenerator {
    id: usize,
}

impl Default for AccountGenerator {
    fn default() -> Self {
        // Start from a high number to avoid conflicts with accounts that
        // already exist on the node or fork.
        AccountGenerator { id: 100500 }
    }
}

impl Iterator for AccountGenerator {
    type Item = TestAccount;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buffer = [0; 32];

        loop {
            self.id = self.id.checked_add(1)?;

            buffer[24..].copy_from_slice(&self.id.to_be_bytes());
            let Ok(signer) = PrivateKeySigner::from_slice(&buffer) else {
                continue;
            };

            break Some(TestAccount { signer });
        }
    }
}

/// A test token together with the account allowed to mint it.
#[derive(Debug)]
pub struct MintableToken {
    contract: ERC20Mintable::Instance,
    minter: Address,
}

impl MintableToken {
    pub fn new(contract: ERC20Mintable::Instance, minter: Address) -> Self {
        Self { contract, minter }
    }

    pub async fn mint(&self, to: Address, amount: U256) {
        self.contract
            .mint(to, amount)
            .from(self.minter)
            .send()
            .await
            .unwrap()
            .watch()
            .await
            .unwrap();
    }
}

impl Deref for MintableToken {
    type Target = ERC20Mintable::Instance;

    fn deref(&self) -> &Self::Target {
        &self.contract
    }
}

/// The accounts every test module gets, mirroring the deployment roles plus
/// a handful of anonymous users.
pub struct FixtureAccounts {
    pub deployer: TestAccount,
    pub owner: TestAccount,
    pub fee_receiver: TestAccount,
    pub alice: TestAccount,
    pub bob: TestAccount,
    pub charlie: TestAccount,
    pub dave: TestAccount,
    pub erin: TestAccount,
    pub frank: TestAccount,
}

impl FixtureAccounts {
    /// The anonymous user accounts, in fixture order.
    pub fn users(&self) -> [&TestAccount; 5] {
        [&self.bob, &self.charlie, &self.dave, &self.erin, &self.frank]
    }
}

/// Utility methods over a test node: unique account generation, balance
/// minting and transaction impersonation.
pub struct OnchainComponents {
    provider: DynProvider,
    accounts: AccountGenerator,
}

impl OnchainComponents {
    pub fn new(provider: DynProvider) -> Self {
        Self {
            provider,
            accounts: Default::default(),
        }
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Generate the next `N` accounts with the given initial balance,
    /// impersonated on the node so fixtures can send from them directly.
    pub async fn make_accounts<const N: usize>(&mut self, with_wei: U256) -> [TestAccount; N] {
        let res = (&mut self.accounts).take(N).collect::<Vec<_>>();
        assert_eq!(res.len(), N);

        for account in &res {
            self.provider
                .anvil_impersonate_account(account.address())
                .await
                .unwrap();
            self.provider
                .anvil_set_balance(account.address(), with_wei)
                .await
                .unwrap();
        }

        res.try_into().unwrap()
    }

    /// The standard set of named fixture accounts.
    pub async fn fixture_accounts(&mut self, with_wei: U256) -> FixtureAccounts {
        let [deployer, owner, fee_receiver, alice, bob, charlie, dave, erin, frank] =
            self.make_accounts(with_wei).await;
        FixtureAccounts {
            deployer,
            owner,
            fee_receiver,
            alice,
            bob,
            charlie,
            dave,
            erin,
            frank,
        }
    }

    /// Sets the account's ETH balance and mints the given token amounts to
    /// it.
    pub async fn mint_account(
        &self,
        account: Address,
        tokens: &[MintableToken],
        eth_balance: U256,
        amounts: &[U256],
    ) {
        self.provider
            .anvil_set_balance(account, eth_balance)
            .await
            .unwrap();
        for (token, amount) in tokens.iter().zip(amounts) {
            token.mint(account, *amount).await;
        }
    }

    /// Grants `spender` a maximum allowance over each token, sent from
    /// `account`.
    pub async fn approve_account(
        &self,
        account: Address,
        tokens: &[MintableToken],
        spender: Address,
    ) {
        for token in tokens {
            token
                .approve(spender, U256::MAX)
                .from(account)
                .send()
                .await
                .unwrap()
                .watch()
                .await
                .unwrap();
        }
    }

    /// Seeds an existing base pool with liquidity provided by `user`.
    pub async fn add_base_pool_liquidity(
        &self,
        user: Address,
        base_pool: &CurveStableSwapNG::Instance,
        tokens: &[MintableToken],
        decimals: &[u8],
    ) {
        let mut amounts = Vec::with_capacity(tokens.len());
        for (token, d) in tokens.iter().zip(decimals) {
            let amount =
                U256::from(BASE_POOL_SEED_TOKENS) * U256::from(10u64).pow(U256::from(*d));
            token.mint(user, amount).await;
            token
                .approve(*base_pool.address(), U256::MAX)
                .from(user)
                .send()
                .await
                .unwrap()
                .watch()
                .await
                .unwrap();
            amounts.push(amount);
        }

        base_pool
            .add_liquidity(amounts, U256::ZERO)
            .from(user)
            .send()
            .await
            .unwrap()
            .watch()
            .await
            .unwrap();
    }

    /// Deposits the initial liquidity into a freshly deployed plain pool.
    pub async fn add_initial_liquidity(
        &self,
        user: Address,
        swap: &CurveStableSwapNG::Instance,
        deposit_amounts: Vec<U256>,
    ) {
        swap.add_liquidity(deposit_amounts, U256::ZERO)
            .from(user)
            .send()
            .await
            .unwrap()
            .watch()
            .await
            .unwrap();
    }

    /// Deposits the initial liquidity into a freshly deployed metapool: seed
    /// the base pool first, then pair the earned LP balance with a matching
    /// amount of the metapool's own coin.
    #[allow(clippy::too_many_arguments)]
    pub async fn add_initial_liquidity_meta(
        &self,
        user: Address,
        swap: &CurveStableSwapNG::Instance,
        paired_token: &MintableToken,
        base_pool: &CurveStableSwapNG::Instance,
        base_pool_tokens: &[MintableToken],
        base_pool_decimals: &[u8],
        base_pool_lp_token: &ERC20Mintable::Instance,
    ) {
        self.add_base_pool_liquidity(user, base_pool, base_pool_tokens, base_pool_decimals)
            .await;

        base_pool_lp_token
            .approve(*swap.address(), U256::MAX)
            .from(user)
            .send()
            .await
            .unwrap()
            .watch()
            .await
            .unwrap();

        let lp_token_bal = base_pool_lp_token.balanceOf(user).call().await.unwrap();
        let paired_decimals = paired_token.decimals().call().await.unwrap();
        let lp_decimals = base_pool_lp_token.decimals().call().await.unwrap();
        let to_mint_paired = lp_token_bal * U256::from(10u64).pow(U256::from(paired_decimals))
            / U256::from(10u64).pow(U256::from(lp_decimals));

        paired_token.mint(user, to_mint_paired).await;
        paired_token
            .approve(*swap.address(), U256::MAX)
            .from(user)
            .send()
            .await
            .unwrap()
            .watch()
            .await
            .unwrap();

        swap.add_liquidity(vec![to_mint_paired, lp_token_bal], U256::ZERO)
            .from(user)
            .send()
            .await
            .unwrap()
            .watch()
            .await
            .unwrap();
    }

    /// Funds `user` for a metapool deposit without adding liquidity to the
    /// metapool itself.
    pub async fn mint_meta(
        &self,
        user: Address,
        paired_token: &MintableToken,
        paired_amount: U256,
        base_pool: &CurveStableSwapNG::Instance,
        base_pool_tokens: &[MintableToken],
        base_pool_decimals: &[u8],
    ) {
        self.add_base_pool_liquidity(user, base_pool, base_pool_tokens, base_pool_decimals)
            .await;
        paired_token.mint(user, paired_amount).await;
    }
}
