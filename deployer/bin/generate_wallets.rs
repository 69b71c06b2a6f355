use clap::Parser;
use deployer::{cli::WalletsConfig, deployer::run_generate_wallets, env::init_console_subscriber};
use tracing::{error, info};

fn main() {
    dotenv::dotenv().ok();
    init_console_subscriber();
    let config = WalletsConfig::parse();
    match run_generate_wallets(&config) {
        Ok(book) => {
            info!("Wallets generated");
            print!("{}", book.table());
        }
        Err(err) => {
            error!("Error generating wallets: {:#}", err);
            std::process::exit(1);
        }
    }
}
