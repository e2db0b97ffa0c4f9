pub mod checker;
pub mod client;
pub mod config;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_from_file(path)?,
        None => config::Config::default(),
    };

    env_logger::Builder::new()
        .parse_filters(config.log_level())
        .init();

    let client = client::DeviceClient::new(&config.base_url()?)?;
    checker::run(&client, &config).await?;

    println!("All checks passed!");
    Ok(())
}
