use clap::Parser;
use deployer::{cli::CollectionConfig, deployer::run_collection, env::init_console_subscriber};
use tracing::error;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_console_subscriber();
    let config = CollectionConfig::parse();
    match run_collection(&config).await {
        Ok(deployment) => println!("{}", deployment.address),
        Err(err) => {
            error!("Deployment failed: {:#}", err);
            std::process::exit(1);
        }
    }
}
