//! Wire types shared between the daemon and the CLI client.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The three rare events the API estimates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    SharkAttack,
    LightningStrike,
    MeteorImpact,
}

impl Event {
    pub const ALL: [Event; 3] = [
        Event::SharkAttack,
        Event::LightningStrike,
        Event::MeteorImpact,
    ];

    /// Wire name, as used in response keys and URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SharkAttack => "shark_attack",
            Event::LightningStrike => "lightning_strike",
            Event::MeteorImpact => "meteor_impact",
        }
    }

    /// Human-readable label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Event::SharkAttack => "Shark attack",
            Event::LightningStrike => "Lightning strike",
            Event::MeteorImpact => "Meteor impact",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The echoed request inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    pub age: f64,
    pub city: String,
}

/// Per-event output: a formatted probability plus a verdict line.
/// Ephemeral, computed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityResult {
    pub probability: String,
    pub verdict: String,
}

/// Full response body: echoed inputs plus per-event results. Single-event
/// endpoints carry a one-entry `results` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub inputs: Inputs,
    pub results: BTreeMap<Event, ProbabilityResult>,
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Daemon health, same shape the ctl `health` command prints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_to_snake_case_keys() {
        assert_eq!(
            serde_json::to_string(&Event::SharkAttack).unwrap(),
            "\"shark_attack\""
        );
        let mut results = BTreeMap::new();
        results.insert(
            Event::MeteorImpact,
            ProbabilityResult {
                probability: "1 in 160,000,000".to_string(),
                verdict: "Astronomically low.".to_string(),
            },
        );
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("meteor_impact").is_some());
    }

    #[test]
    fn events_sort_shark_lightning_meteor() {
        // BTreeMap keys follow declaration order so responses stay stable
        let order: Vec<&str> = Event::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(order, ["shark_attack", "lightning_strike", "meteor_impact"]);
    }
}
