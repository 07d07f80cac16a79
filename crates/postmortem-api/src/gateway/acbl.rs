use crate::config::ApiConfig;
use crate::gateway::UpstreamError;
use serde_json::Value;
use tracing::info;

/// Client for the ACBL club and tournament endpoints. The tournament API
/// wants a bearer key; the club-results host does not.
#[derive(Debug, Clone)]
pub struct AcblClient {
    http: reqwest::Client,
    api_base_url: String,
    club_base_url: String,
    api_key: Option<String>,
}

impl AcblClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base_url: config.acbl_api_base_url.clone(),
            club_base_url: config.acbl_club_base_url.clone(),
            api_key: config.acbl_api_key.clone(),
        }
    }

    /// Club game history for a player number.
    pub async fn club_player_history(
        &self,
        player_id: &str,
    ) -> Result<Option<Value>, UpstreamError> {
        let url = format!("{}/club-results/my-results/{}", self.club_base_url, player_id);
        info!("fetching club player history from {}", url);
        self.fetch_json(url, false).await
    }

    /// Club results for an ACBL number.
    pub async fn club_results(&self, acbl_number: &str) -> Result<Option<Value>, UpstreamError> {
        let url = format!(
            "{}/club-results/my-results/{}",
            self.club_base_url, acbl_number
        );
        info!("fetching club results from {}", url);
        self.fetch_json(url, false).await
    }

    /// Tournament session history for a player number.
    pub async fn tournament_player_history(
        &self,
        player_id: &str,
    ) -> Result<Option<Value>, UpstreamError> {
        let url = format!(
            "{}/v1/tournament/player/history_query?acbl_number={}",
            self.api_base_url, player_id
        );
        info!("fetching tournament player history from {}", url);
        self.fetch_json(url, true).await
    }

    /// Results for one tournament session.
    pub async fn tournament_session_results(
        &self,
        session_id: &str,
    ) -> Result<Option<Value>, UpstreamError> {
        let url = format!("{}/v1/tournament/session?id={}", self.api_base_url, session_id);
        info!("fetching tournament session results from {}", url);
        self.fetch_json(url, true).await
    }

    /// GET + decode; an upstream 404 is "no result", not an error.
    async fn fetch_json(&self, url: String, bearer: bool) -> Result<Option<Value>, UpstreamError> {
        let mut request = self.http.get(&url);
        if bearer {
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status { url, status });
        }

        let value = response
            .json()
            .await
            .map_err(|source| UpstreamError::Transport { url, source })?;
        Ok(Some(value))
    }
}
