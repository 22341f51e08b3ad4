mod accounts;
mod blueprint_deploy;
mod liquidity;
