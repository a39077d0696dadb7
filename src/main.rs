use clap::Parser;

mod config;
mod error;
mod llm_manager;
mod logger;
mod providers;
mod quest_generator;
mod thinking;

use config::Config;
use error::error_envelope;
use providers::IntelligenceProvider;
use quest_generator::QuestGenerator;

#[derive(Parser)]
#[command(name = "quest_forge")]
struct Args {
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,
    /// Free-text description of the quest to generate
    message: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init(args.verbose);
    dotenv::dotenv().ok();
    println!("{}", run(args).await);
}

async fn run(args: Args) -> String {
    let Some(message) = args.message else {
        return error_envelope("No message provided");
    };

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => return error_envelope(&format!("{:#}", e)),
    };

    let provider = IntelligenceProvider::new(&config.provider, config.api_key());
    QuestGenerator::new(Box::new(provider))
        .generate_quest(&message)
        .await
}
