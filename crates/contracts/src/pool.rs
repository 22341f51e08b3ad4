//! A deployed stableswap-ng pool. The pool contract is its own LP token.

#[allow(non_snake_case)]
mod private {
    alloy::sol! {
        #[allow(missing_docs)]
        #[sol(rpc)]
        contract CurveStableSwapNG {
            function add_liquidity(uint256[] amounts, uint256 min_mint_amount) external returns (uint256);
            function remove_liquidity(uint256 burn_amount, uint256[] min_amounts) external returns (uint256[]);
            function coins(uint256 i) external view returns (address);
            function N_COINS() external view returns (uint256);
            function decimals() external view returns (uint8);
            function balanceOf(address owner) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function transfer(address to, uint256 amount) external returns (bool);
        }
    }
}

#[allow(non_snake_case)]
pub mod CurveStableSwapNG {
    use alloy::providers::DynProvider;

    pub use super::private::CurveStableSwapNG::*;

    pub type Instance = CurveStableSwapNGInstance<DynProvider>;
}
