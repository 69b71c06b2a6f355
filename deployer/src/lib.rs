pub mod cli;
pub mod constants;
pub mod deployer;
pub mod deployments;
pub mod env;
pub mod factory;
pub mod network;
pub mod wallets;
