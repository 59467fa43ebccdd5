//! HTTP client for communicating with chancesd.

use anyhow::{anyhow, Result};
use chances_common::{AggregateResult, ErrorBody, Event, HealthResponse};
use reqwest::StatusCode;

/// Client for the local ChancesAre daemon.
pub struct ChancesClient {
    base_url: String,
    http: reqwest::Client,
}

impl ChancesClient {
    pub fn new(port: u16) -> Self {
        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch odds; `event` of `None` hits the aggregate endpoint.
    pub async fn odds(
        &self,
        age: f64,
        city: &str,
        event: Option<Event>,
    ) -> Result<AggregateResult> {
        let path = match event {
            None => "weird",
            Some(Event::SharkAttack) => "shark",
            Some(Event::LightningStrike) => "lightning",
            Some(Event::MeteorImpact) => "meteor",
        };

        let response = self
            .http
            .get(format!("{}/probability/{}", self.base_url, path))
            .query(&[("age", age.to_string()), ("city", city.to_string())])
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::BAD_REQUEST => {
                let body: ErrorBody = response.json().await?;
                Err(anyhow!("Rejected: {}", body.error))
            }
            status => Err(anyhow!("Unexpected response: {}", status)),
        }
    }

    /// Get daemon health.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .http
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map_err(|e| self.connect_error(e))?;

        Ok(response.json().await?)
    }

    fn connect_error(&self, e: reqwest::Error) -> anyhow::Error {
        anyhow!(
            "Cannot reach the ChancesAre daemon at {}: {}\n\n\
             Is it running? Start it with:\n\
             chancesd",
            self.base_url,
            e
        )
    }
}
