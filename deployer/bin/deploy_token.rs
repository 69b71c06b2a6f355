use clap::Parser;
use deployer::{cli::TokenConfig, deployer::run_token, env::init_console_subscriber};
use tracing::error;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_console_subscriber();
    let config = TokenConfig::parse();
    match run_token(&config).await {
        Ok(deployment) => println!("{}", deployment.address),
        Err(err) => {
            error!("Error deploying BrainerToken: {:#}", err);
            std::process::exit(1);
        }
    }
}
