use std::future::Future;
use std::time::Duration;

use resfind_core::config::DeliveryConfig;
use resfind_core::{EntryCollection, EntryQuery};

use crate::error::DeliveryError;

/// Maximum body length quoted in error messages.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Anything that can answer an entries query.
///
/// [`DeliveryClient`] is the production implementation; tests substitute
/// their own.
pub trait EntrySource {
    fn get_entries(
        &self,
        query: &EntryQuery,
    ) -> impl Future<Output = Result<EntryCollection, DeliveryError>> + Send;
}

/// Client for the Content Delivery API.
pub struct DeliveryClient {
    client: reqwest::Client,
    base_url: String,
    space_id: String,
    environment: String,
    access_token: String,
}

impl std::fmt::Debug for DeliveryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryClient")
            .field("base_url", &self.base_url)
            .field("space_id", &self.space_id)
            .field("environment", &self.environment)
            .field("access_token", &"***")
            .finish()
    }
}

impl DeliveryClient {
    /// Creates a client for one space and environment.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        base_url: impl Into<String>,
        space_id: impl Into<String>,
        environment: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DeliveryError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            space_id: space_id.into(),
            environment: environment.into(),
            access_token: access_token.into(),
        })
    }

    /// Creates a client from the `[delivery]` config section.
    ///
    /// # Errors
    /// Returns an error if `space_id` or `access_token` is unset, or if the
    /// HTTP client cannot be built.
    pub fn from_config(config: &DeliveryConfig) -> Result<Self, DeliveryError> {
        for (key, value) in [
            ("delivery.space_id", &config.space_id),
            ("delivery.access_token", &config.access_token),
        ] {
            if value.trim().is_empty() {
                return Err(DeliveryError::ClientInit(format!("{key} is not set")));
            }
        }
        Self::new(
            config.base_url.as_str(),
            config.space_id.as_str(),
            config.environment.as_str(),
            config.access_token.as_str(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// `{base}/spaces/{space}/environments/{env}/entries`
    #[must_use]
    pub fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.base_url, self.space_id, self.environment
        )
    }
}

impl EntrySource for DeliveryClient {
    async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, DeliveryError> {
        let params = query.to_params();
        tracing::debug!(url = %self.entries_url(), ?params, "requesting entries");

        let response = self
            .client
            .get(self.entries_url())
            .bearer_auth(&self.access_token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DeliveryError::Status {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|e| DeliveryError::Decode {
            context: format!("entries response (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
