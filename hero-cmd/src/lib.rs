//! Command implementations for the hero form CLI.
//!
//! Submits the same payload the web form sends, and lists the hero
//! catalog.

use clap::Subcommand;
use hero_core::gateway::DEFAULT_ENDPOINT;
use hero_core::{GatewayConfig, SubmissionGateway};

pub mod heroes;
pub mod submit;

#[derive(Subcommand)]
pub enum Command {
    /// Submit name, age and hero to the inference endpoint and print the result
    Submit {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your age, as a whole number
        #[arg(short, long)]
        age: String,

        /// Favorite hero (see `heroes` for the stock list)
        #[arg(long)]
        hero: String,

        /// Inference endpoint URL
        #[arg(long, env = "HERO_FORM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// List the stock hero catalog
    Heroes,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Submit {
            name,
            age,
            hero,
            endpoint,
        } => {
            let gateway = SubmissionGateway::with_config(GatewayConfig { endpoint });
            let output = submit::run_submit(&gateway, &name, &age, &hero).await?;
            print!("{}", output);
            Ok(())
        }
        Command::Heroes => {
            for hero in heroes::list_heroes() {
                println!("{}", hero);
            }
            Ok(())
        }
    }
}
