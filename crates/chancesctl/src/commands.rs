//! Command implementations for chancesctl.

use crate::client::ChancesClient;
use anyhow::Result;
use chances_common::Event;
use owo_colors::OwoColorize;

/// Fetch and print the odds table.
pub async fn odds(
    client: &ChancesClient,
    age: f64,
    city: &str,
    event: Option<Event>,
) -> Result<()> {
    let report = client.odds(age, city, event).await?;

    println!();
    println!(
        "  Odds for a {} year old in {}",
        report.inputs.age.bold(),
        report.inputs.city.bold()
    );
    println!();

    for (event, result) in &report.results {
        println!(
            "  {:<18} {}  {}",
            event.label().cyan(),
            result.probability.bold(),
            result.verdict.dimmed()
        );
    }
    println!();

    Ok(())
}

/// Print daemon health.
pub async fn health(client: &ChancesClient) -> Result<()> {
    let health = client.health().await?;

    let status = if health.status == "healthy" {
        health.status.green().to_string()
    } else {
        health.status.red().to_string()
    };

    println!("  Status:  {}", status);
    println!("  Version: {}", health.version);
    println!("  Uptime:  {}s", health.uptime_seconds);

    Ok(())
}
