//! Hero CLI - submit form data to the hero inference endpoint.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hero-cli",
    version,
    about = "Hero inference form from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: hero_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    hero_cmd::run(cli.command).await
}
