//! HTTP client for the goal planner REST API.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use std::time::Duration;

use crate::error::{RemoteError, Result};
use crate::types::ApiErrorResponse;
use goalplanner_core::goals::{
    DepositOption, DepositRequest, Goal, GoalCollectionSnapshot, GoalUpdate, NewGoal,
};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the goal planner REST API.
///
/// `base_url` points at the API root (e.g. `http://localhost:8080/api/v1`);
/// goals live under `{base_url}/goals`.
#[derive(Debug, Clone)]
pub struct GoalApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoalApiClient {
    /// Create a new client with the default timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RemoteError::invalid_request(format!(
                "Base URL must start with http:// or https://: {}",
                base_url
            )));
        }
        Url::parse(base_url).map_err(|e| {
            RemoteError::invalid_request(format!("Invalid base URL {}: {}", base_url, e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(Self::headers())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| RemoteError::invalid_request(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::invalid_request("Base URL cannot carry a path"))?
            .extend(segments);
        Ok(url)
    }

    fn goal_url(&self, goal_id: &str) -> Result<Url> {
        self.url(&["goals", goal_id])
    }

    /// Turn a non-success response into an API error.
    async fn error_from(response: reqwest::Response) -> RemoteError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return RemoteError::Http(e),
        };
        debug!("API error response ({}): {}", status, body);

        match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(error) => RemoteError::api(status.as_u16(), error.kind, error.message),
            Err(_) => RemoteError::api(status.as_u16(), None, format!("Request failed: {}", body)),
        }
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            RemoteError::Json(e)
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Goals resource
    // ─────────────────────────────────────────────────────────────────────────

    /// GET /goals
    pub async fn list_goals(&self) -> Result<Vec<Goal>> {
        let response = self.client.get(self.url(&["goals"])?).send().await?;
        Self::parse_response(response).await
    }

    /// GET /goals/{id}
    pub async fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        let response = self.client.get(self.goal_url(goal_id)?).send().await?;
        Self::parse_response(response).await
    }

    /// POST /goals
    pub async fn create_goal(&self, new_goal: &NewGoal) -> Result<Goal> {
        debug!("Creating remote goal '{}'", new_goal.name);
        let response = self
            .client
            .post(self.url(&["goals"])?)
            .json(new_goal)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// PATCH /goals/{id}
    pub async fn update_goal(&self, goal_id: &str, goal_update: &GoalUpdate) -> Result<Goal> {
        let response = self
            .client
            .patch(self.goal_url(goal_id)?)
            .json(goal_update)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// DELETE /goals/{id}
    pub async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        let response = self.client.delete(self.goal_url(goal_id)?).send().await?;
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            _ => Err(Self::error_from(response).await),
        }
    }

    /// POST /goals/{id}/deposits
    pub async fn deposit(&self, goal_id: &str, deposit: &DepositRequest) -> Result<Goal> {
        let url = self.url(&["goals", goal_id, "deposits"])?;
        let response = self.client.post(url).json(deposit).send().await?;
        Self::parse_response(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collection view
    // ─────────────────────────────────────────────────────────────────────────

    /// GET /collection
    pub async fn get_collection(&self) -> Result<GoalCollectionSnapshot> {
        let response = self.client.get(self.url(&["collection"])?).send().await?;
        Self::parse_response(response).await
    }

    /// GET /collection/deposit-options
    pub async fn get_deposit_options(&self) -> Result<Vec<DepositOption>> {
        let url = self.url(&["collection", "deposit-options"])?;
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }
}
