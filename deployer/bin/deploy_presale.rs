use clap::Parser;
use deployer::{cli::PreSaleConfig, deployer::run_presale, env::init_console_subscriber};
use tracing::error;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_console_subscriber();
    let config = PreSaleConfig::parse();
    match run_presale(&config).await {
        Ok(deployment) => println!("{}", deployment.address),
        Err(err) => {
            error!("Error deploying BrainerPreSale: {:#}", err);
            std::process::exit(1);
        }
    }
}
