use anyhow::Result;
use clap::Parser;
use deployer::{
    cli::Command,
    deployer::{run_collection, run_generate_wallets, run_presale, run_token},
    env::init_console_subscriber,
};
use tracing::error;

async fn run(command: Command) -> Result<()> {
    match command {
        Command::DeployCollection(config) => {
            let deployment = run_collection(&config).await?;
            println!("{}", deployment.address);
        }
        Command::DeployToken(config) => {
            let deployment = run_token(&config).await?;
            println!("{}", deployment.address);
        }
        Command::DeployPresale(config) => {
            let deployment = run_presale(&config).await?;
            println!("{}", deployment.address);
        }
        Command::GenerateWallets(config) => {
            let book = run_generate_wallets(&config)?;
            print!("{}", book.table());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_console_subscriber();
    if let Err(err) = run(Command::parse()).await {
        error!("Command failed: {:#}", err);
        std::process::exit(1);
    }
}
