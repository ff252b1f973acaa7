use crate::domain::model::ApiResponse;
use crate::domain::options::{Gender, Nationality};
use crate::domain::ports::UserApi;
use crate::utils::error::{RandomUserError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: Client,
    endpoint: Url,
}

impl RandomUserClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("randomuser/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: api_endpoint(base_url)?,
        })
    }

    pub fn with_default_base_url() -> Result<Self> {
        Self::new(
            DEFAULT_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `{base}/api/`, tolerating a base URL with or without trailing slash.
fn api_endpoint(base_url: &str) -> Result<Url> {
    let invalid = |reason: String| RandomUserError::InvalidConfigValueError {
        field: "api.base_url".to_string(),
        value: base_url.to_string(),
        reason,
    };

    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    Url::parse(&normalized)
        .and_then(|base| base.join("api/"))
        .map_err(|e| invalid(format!("Invalid URL format: {}", e)))
}

#[async_trait]
impl UserApi for RandomUserClient {
    async fn get_random_user(&self, gender: Gender, nat: Nationality) -> Result<ApiResponse> {
        tracing::debug!(
            "Requesting random user from {} (gender={}, nat={})",
            self.endpoint,
            gender,
            nat
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("gender", gender.as_query()), ("nat", nat.code())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });
            return Err(RandomUserError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        // randomuser.me reports some failures as `{"error": "..."}` with a 200
        if let Some(message) = error_message(&body) {
            return Err(RandomUserError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ApiResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            "Received {} result(s)",
            parsed.results.as_ref().map_or(0, Vec::len)
        );
        Ok(parsed)
    }
}

fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
