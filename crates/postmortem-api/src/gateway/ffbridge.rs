use crate::config::ApiConfig;
use crate::gateway::UpstreamError;
use bridge_tabular::{enrich_scores, EnrichError, RecordSet, SchemaError, SessionKeys};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// Anything that can go wrong while building the enriched score table.
#[derive(Debug, Error)]
pub enum FfbridgeError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Enrich(#[from] EnrichError),
}

/// Client for the FFBridge results API.
#[derive(Debug, Clone)]
pub struct FfbridgeClient {
    http: reqwest::Client,
    base_url: String,
}

impl FfbridgeClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.ffbridge_base_url.clone(),
        }
    }

    /// Team/roster record for one pair.
    pub async fn fetch_team(&self, team_id: u32) -> Result<Value, UpstreamError> {
        let url = format!("{}/results/teams/{}", self.base_url, team_id);
        info!("fetching team record from {}", url);
        self.fetch_json(url).await
    }

    /// Per-board score records for one pair in one session.
    pub async fn fetch_session_scores(
        &self,
        team_id: u32,
        session_id: u32,
    ) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}/results/teams/{}/session/{}/scores",
            self.base_url, team_id, session_id
        );
        info!("fetching session scores from {}", url);
        self.fetch_json(url).await
    }

    /// Fetches the team record, then the session scores (the second request
    /// is not issued until the first completes), and enriches the scores
    /// into the final table.
    pub async fn team_session_table(
        &self,
        keys: &SessionKeys,
    ) -> Result<RecordSet, FfbridgeError> {
        let team_json = self.fetch_team(keys.team_id).await?;
        let team = RecordSet::assemble(&team_json)?;

        let scores_json = self
            .fetch_session_scores(keys.team_id, keys.session_id)
            .await?;
        let scores = RecordSet::assemble(&scores_json)?;

        Ok(enrich_scores(scores, &team, keys)?)
    }

    async fn fetch_json(&self, url: String) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| UpstreamError::Transport { url, source })
    }
}
