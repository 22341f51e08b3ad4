//! Mintable ERC-20 used as a stand-in coin in tests.

#[allow(non_snake_case)]
mod private {
    alloy::sol! {
        #[allow(missing_docs)]
        #[sol(rpc)]
        contract ERC20Mintable {
            function name() external view returns (string);
            function symbol() external view returns (string);
            function decimals() external view returns (uint8);
            function totalSupply() external view returns (uint256);
            function balanceOf(address owner) external view returns (uint256);
            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function transfer(address to, uint256 amount) external returns (bool);
            function transferFrom(address from, address to, uint256 amount) external returns (bool);
            function mint(address to, uint256 amount) external returns (bool);
        }
    }
}

#[allow(non_snake_case)]
pub mod ERC20Mintable {
    use alloy::providers::DynProvider;

    pub use super::private::ERC20Mintable::*;

    pub type Instance = ERC20MintableInstance<DynProvider>;
}
