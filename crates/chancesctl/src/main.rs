//! ChancesAre Control - CLI client for the ChancesAre daemon.
//!
//! Queries the HTTP API and pretty-prints the odds to the terminal.

mod client;
mod commands;

use anyhow::Result;
use chances_common::Event;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "chancesctl")]
#[command(about = "ChancesAre - rare event odds from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Port the daemon listens on
    #[arg(long, global = true, default_value_t = 8080)]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the odds for an age and city
    Odds {
        /// Your age in years
        #[arg(long)]
        age: f64,

        /// City name (e.g. Barcelona)
        #[arg(long)]
        city: String,

        /// Restrict to a single event
        #[arg(long, value_enum)]
        event: Option<EventArg>,
    },

    /// Show daemon health
    Health,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EventArg {
    Shark,
    Lightning,
    Meteor,
}

impl From<EventArg> for Event {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::Shark => Event::SharkAttack,
            EventArg::Lightning => Event::LightningStrike,
            EventArg::Meteor => Event::MeteorImpact,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = client::ChancesClient::new(cli.port);

    match cli.command {
        Commands::Odds { age, city, event } => {
            commands::odds(&client, age, &city, event.map(Event::from)).await
        }
        Commands::Health => commands::health(&client).await,
    }
}
