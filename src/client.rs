//! HTTP client for communicating with tripmatch-server

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use tripmatch_core::{DateRange, PlanDraft, PlanRecord};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// HTTP client for tripmatch-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /plans
    pub async fn list_plans(&self) -> Result<Vec<PlanRecord>> {
        let resp = self
            .http
            .get(format!("{}/plans", self.base_url))
            .send()
            .await
            .context("Failed to connect to server")?;

        parse(resp).await
    }

    /// POST /plans
    pub async fn create_plan(&self, draft: &PlanDraft) -> Result<PlanRecord> {
        let resp = self
            .http
            .post(format!("{}/plans", self.base_url))
            .json(draft)
            .send()
            .await
            .context("Failed to connect to server")?;

        parse(resp).await
    }

    /// GET /plans/matches
    pub async fn matching_plans(&self, range: &DateRange) -> Result<Vec<PlanRecord>> {
        let resp = self
            .http
            .get(format!("{}/plans/matches", self.base_url))
            .query(&[
                ("start", range.start().to_string()),
                ("end", range.end().to_string()),
            ])
            .send()
            .await
            .context("Failed to connect to server")?;

        parse(resp).await
    }
}

/// Decode a success body, or surface the server's error message.
async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let err = resp
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("Server returned {}", status));
        anyhow::bail!("{}", err);
    }

    Ok(resp.json().await?)
}
