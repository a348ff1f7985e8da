use clap::{CommandFactory, Parser};
use dotenvy::dotenv;

use stars_bot::{BotError, Cli, Startup};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let startup = match Startup::load(Cli::parse(), |key| std::env::var(key).ok()) {
        Ok(startup) => startup,
        Err(e) => {
            println!("An error occurred when obtaining the tokens: {e}");
            if matches!(e, BotError::ConfigMissing(_)) {
                let _ = Cli::command().print_help();
            }
            return;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&startup.config().log_level),
    )
    .init();

    if let Err(e) = run(startup).await {
        println!("An error occurred: {e}");
    }
}

async fn run(startup: Startup) -> Result<(), BotError> {
    startup.prepare().await?.run().await
}
